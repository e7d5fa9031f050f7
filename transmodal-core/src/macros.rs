//! Provides a way to avoid repeating boilerplate code.

/// A macro to define a property as an extension on `Dimensions` type.
/// The macro expects `Dimensions` type to be in the scope at the call site.
#[macro_export]
macro_rules! custom_dimension {
    ($name:ident typeof $type:ty) => {
        paste::paste! {
            #[doc = " Extends `Dimensions` within a new ["[<$name Dimension>]"] trait to get/set "$name " property."]
            pub trait [<$name Dimension>] {
                #[doc = " Gets "$name " property."]
                fn [<get_ $name:snake:lower>](&self) -> Option<&$type>;

                #[doc = " Sets "$name " property."]
                fn [<set_ $name:snake:lower>](&mut self, value: $type) -> &mut Self;
            }

            // define a dummy struct type which is used as a key
            struct [<$name DimensionKey>];

            impl [<$name Dimension>] for Dimensions {
                fn [<get_ $name:snake:lower>](&self) -> Option<&$type> {
                    self.get_value::<[<$name DimensionKey>], _>()
                }

                fn [<set_ $name:snake:lower>](&mut self, value: $type) -> &mut Self {
                    self.set_value::<[<$name DimensionKey>], _>(value);
                    self
                }
            }
        }
    };
}
