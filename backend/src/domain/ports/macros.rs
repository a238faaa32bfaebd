//! Helper macro for declaring driven-port error enums.
//!
//! Each variant carries named fields and a display message; the macro derives
//! `thiserror::Error` and adds a snake_case constructor per variant that
//! accepts anything convertible into the field types.

macro_rules! define_port_error {
    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Offline { message: String } => "store offline: {message}",
            Conflict { id: i32 } => "conflicting id {id}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = StoreError::offline("refused");
        assert_eq!(err.to_string(), "store offline: refused");
    }

    #[test]
    fn non_string_fields_keep_their_type() {
        assert_eq!(StoreError::conflict(7), StoreError::Conflict { id: 7 });
    }
}
