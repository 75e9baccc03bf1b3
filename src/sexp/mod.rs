/// Builds a proper list HeapSexp from elements convertible into HeapSexp.
///
/// Example:
///  let quoted = list!("quote".to_symbol_or_panic(), Number::new(1));
#[macro_export]
macro_rules! list {
    () => {
        $crate::sexp::HeapSexp::new($crate::sexp::Sexp::Nil)
    };
    ($($elem:expr),+ $(,)?) => {
        {
            let mut list = $crate::sexp::ConsList::new();
            $(
                list.append($elem);
            )+
            list.release()
        }
    };
}

pub mod cons;
pub mod cons_list;
pub mod sexp;


pub use cons::{cons, Cons};
pub use cons_list::ConsList;
pub use sexp::{ColoredSexp, HeapSexp, Sexp, SexpIter};
