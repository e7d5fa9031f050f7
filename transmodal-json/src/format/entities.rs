//! Provides extension points on the core dimensions to keep display metadata of nodes.

macro_rules! custom_dimension {
    ($trait_name:ident with $field_name:ident using $type:ty) => {
        paste::paste! {
            #[doc = " A trait to get or set " $field_name "."]
            pub trait $trait_name {
                #[doc = " Gets " $field_name "."]
                fn [<get_ $field_name>](&self) -> Option<&$type>;

                #[doc = " Sets " $field_name "."]
                fn [<set_ $field_name>](&mut self, value: $type) -> &mut Self;
            }

            // define a dummy struct type which is used as a key
            struct [<$trait_name Key>];

            impl $trait_name for transmodal_core::models::common::Dimensions {
                fn [<get_ $field_name>](&self) -> Option<&$type> {
                    self.get_value::<[<$trait_name Key>], _>()
                }

                fn [<set_ $field_name>](&mut self, value: $type) -> &mut Self {
                    self.set_value::<[<$trait_name Key>], _>(value);
                    self
                }
            }
        }
    };
}

custom_dimension!(NodeNameDimension with node_name using String);

custom_dimension!(NodeColorDimension with node_color using String);
