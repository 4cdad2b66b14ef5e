//! Stack trait definitions and the deep-copy capability

use crate::error::StackError;

/// Last-in-first-out container - allows swapping stack implementations
pub trait Stack<T> {
    /// Place `item` on top of the stack
    fn push(&mut self, item: T) -> Result<(), StackError>;

    /// Remove and return the top item
    fn pop(&mut self) -> Result<T, StackError>;

    /// Borrow the top item without removing it
    fn peek(&self) -> Result<&T, StackError>;

    /// Number of occupied slots
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Element-wise copy that may refuse at runtime
///
/// Types whose copy always succeeds return `Some`. Containers return `None`
/// as soon as any contained element refuses, so a partial copy is never
/// observed.
pub trait DeepClone: Sized {
    fn deep_clone(&self) -> Option<Self>;
}

/// Implement [`DeepClone`] through `Clone` for types that always copy.
macro_rules! deep_clone_via_clone {
    ($($t:ty),* $(,)?) => {
        $(
            impl DeepClone for $t {
                fn deep_clone(&self) -> Option<Self> {
                    Some(self.clone())
                }
            }
        )*
    };
}

deep_clone_via_clone!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    crate::model::Song, crate::model::Genre,
);

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone(&self) -> Option<Self> {
        match self {
            Some(item) => item.deep_clone().map(Some),
            None => Some(None),
        }
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone(&self) -> Option<Self> {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}
