//! Declarative enum and tagged-union builders.

/// Declare a fieldless enum together with its name table.
///
/// Variants take ordinals in declaration order. The generated inherent items
/// are `COUNT`, `ALL`, `NAMES`, `ordinal()`, and `name()`; `NAMES[i]` is
/// always the name of `ALL[i]`.
///
/// ```
/// staged_collections::staged_enum! {
///     pub enum Color { Red, Green, Blue }
/// }
///
/// assert_eq!(Color::COUNT, 3);
/// assert_eq!(Color::Green.ordinal(), 1);
/// assert_eq!(Color::Blue.name(), "Blue");
/// ```
#[macro_export]
macro_rules! staged_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant),+
        }

        #[allow(dead_code)]
        impl $name {
            /// Variant names in declaration order.
            pub const NAMES: &'static [&'static str] = &[$(stringify!($variant)),+];

            /// Number of variants.
            pub const COUNT: usize = Self::NAMES.len();

            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            pub const fn ordinal(self) -> usize {
                self as usize
            }

            #[inline]
            pub const fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }
        }
    };
}

/// Declare a tagged union with a companion tag enum.
///
/// Each variant names its payload type, a constructor, and an accessor. The
/// accessor checks the tag at runtime and panics on a mismatch.
///
/// ```
/// staged_collections::tagged_union! {
///     pub enum Value: ValueTag {
///         Int(i64) => int_make, int_get;
///         Text(String) => text_make, text_get;
///     }
/// }
///
/// let v = Value::int_make(3);
/// assert_eq!(v.tag(), ValueTag::Int);
/// assert_eq!(*v.int_get(), 3);
/// ```
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $tag:ident {
            $($variant:ident($ty:ty) => $make:ident, $get:ident;)+
        }
    ) => {
        $crate::staged_enum! {
            $vis enum $tag { $($variant),+ }
        }

        $(#[$meta])*
        $vis enum $name {
            $($variant($ty)),+
        }

        #[allow(dead_code)]
        impl $name {
            /// Discriminant of the stored variant.
            pub const fn tag(&self) -> $tag {
                match self {
                    $(Self::$variant(_) => $tag::$variant),+
                }
            }

            $(
                pub fn $make(value: $ty) -> Self {
                    Self::$variant(value)
                }
            )+

            $(
                #[allow(unreachable_patterns)]
                pub fn $get(&self) -> &$ty {
                    match self {
                        Self::$variant(value) => value,
                        other => panic!(
                            "tagged union access mismatch: expected {} but the tag is {}",
                            $tag::$variant.name(),
                            other.tag().name()
                        ),
                    }
                }
            )+
        }
    };
}

#[cfg(test)]
mod tests;
