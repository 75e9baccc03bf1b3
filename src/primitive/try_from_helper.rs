/// Implements TryFrom<Sexp-like> for the payload of a Primitive variant.
///
/// Called as:  impl_try_from!(Variant => Type; Sexp, ref Sexp, Primitive,);
macro_rules! impl_try_from {
    ($variant:ident => $to:ty; Sexp, $($tail:tt)*) => {
        impl std::convert::TryFrom<$crate::sexp::Sexp> for $to {
            type Error = $crate::sexp::Sexp;

            fn try_from(value: $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive(
                    $crate::primitive::Primitive::$variant(val)
                ) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!($variant => $to; $($tail)*);
    };
    ($variant:ident => $to:ty; ref Sexp, $($tail:tt)*) => {
        impl<'a> std::convert::TryFrom<&'a $crate::sexp::Sexp> for &'a $to {
            type Error = &'a $crate::sexp::Sexp;

            fn try_from(value: &'a $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive(
                    $crate::primitive::Primitive::$variant(val)
                ) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!($variant => $to; $($tail)*);
    };
    ($variant:ident => $to:ty; Primitive, $($tail:tt)*) => {
        impl std::convert::TryFrom<$crate::primitive::Primitive> for $to {
            type Error = $crate::primitive::Primitive;

            fn try_from(value: $crate::primitive::Primitive) -> Result<Self, Self::Error> {
                if let $crate::primitive::Primitive::$variant(val) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!($variant => $to; $($tail)*);
    };
    ($variant:ident => $to:ty;) => {};
}
