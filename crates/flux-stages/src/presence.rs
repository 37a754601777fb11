//! Presence: what counts as "no value" for `ValidationStage`
use serde_json::Value;
use std::rc::Rc;
use std::sync::Arc;

/// Decides whether a value is present or is a null/empty/falsy stand-in.
///
/// The default answer is `true`, so a plain data type opts in with an empty
/// impl:
///
/// ```ignore
/// impl Presence for Order {}
/// ```
pub trait Presence {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

/// JSON follows script truthiness: `null`, `false`, `0`, `NaN` and `""` are
/// absent; arrays and objects are present even when empty.
impl Presence for Value {
    fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {
    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! int_presence {
    ($($t:ty),*) => {
        $(impl Presence for $t {
            fn is_present(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_presence!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Presence for f32 {
    fn is_present(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Presence for f64 {
    fn is_present(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl<T> Presence for Vec<T> {}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Arc<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Rc<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Plain;
    impl Presence for Plain {}

    #[test]
    fn test_option() {
        assert!(Some(0).is_present());
        assert!(!None::<u8>.is_present());
    }

    #[test]
    fn test_json_truthiness() {
        assert!(!json!(null).is_present());
        assert!(!json!(false).is_present());
        assert!(!json!(0).is_present());
        assert!(!json!(0.0).is_present());
        assert!(!json!("").is_present());

        assert!(json!(true).is_present());
        assert!(json!(-1).is_present());
        assert!(json!("0").is_present());
        assert!(json!([]).is_present());
        assert!(json!({}).is_present());
    }

    #[test]
    fn test_primitives() {
        assert!(!String::new().is_present());
        assert!("x".is_present());
        assert!(!0u32.is_present());
        assert!(7i64.is_present());
        assert!(!f64::NAN.is_present());
        assert!(!false.is_present());
        assert!(Vec::<u8>::new().is_present());
    }

    #[test]
    fn test_default_and_wrappers() {
        assert!(Plain.is_present());
        assert!(Arc::new(Plain).is_present());
        assert!(!Box::new(String::new()).is_present());
    }
}
