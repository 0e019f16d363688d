/// Checks that a numerical value is in the provided interval and returns
/// [`ConfigError::OutOfRange`](crate::error::ConfigError::OutOfRange) from the
/// enclosing function if not
///
/// The interval is closed by default. Prefix the bounds with `open` to exclude the
/// lower bound, i.e. `check_interval!(x, open 0.0, 1.0)` checks `(0.0, 1.0]`.
///
/// ### Example
/// ```ignore
/// let epsilon = 2.0;
/// check_interval!(epsilon, 0.0, 1.0);
/// ```
/// This returns an error rendered as "invalid value for \`epsilon\`: 2. Must be in the interval \[0.0, 1.0\]".
macro_rules! check_interval {
    (@check $var:expr, $cond:expr, $interval:expr) => {
        if !($cond) {
            return Err($crate::error::ConfigError::OutOfRange {
                name: $crate::util::field_name(stringify!($var)),
                value: $var,
                interval: $interval,
            });
        }
    };
    ($var:expr, open $a:expr, $b:expr) => {
        $crate::util::check_interval!(@check $var, $var > $a && $var <= $b, concat!("(", stringify!($a), ", ", stringify!($b), "]"))
    };
    ($var:expr, $a:expr, $b:expr) => {
        $crate::util::check_interval!(@check $var, $var >= $a && $var <= $b, concat!("[", stringify!($a), ", ", stringify!($b), "]"))
    };
}

pub(crate) use check_interval;

/// Strip any leading `self.` / `config.` path so the error names only the field
pub(crate) fn field_name(expr: &'static str) -> &'static str {
    expr.rsplit('.').next().unwrap_or(expr).trim()
}

#[cfg(test)]
mod tests {
    use super::check_interval;
    use crate::error::ConfigError;

    fn closed(value: f32) -> Result<(), ConfigError> {
        check_interval!(value, 0.0, 1.0);
        Ok(())
    }

    fn half_open(value: f32) -> Result<(), ConfigError> {
        check_interval!(value, open 0.0, 1.0);
        Ok(())
    }

    #[test]
    fn closed_interval_bounds() {
        assert!(closed(0.0).is_ok());
        assert!(closed(1.0).is_ok());
        assert!(closed(-0.1).is_err());
        assert!(closed(1.1).is_err());
    }

    #[test]
    fn half_open_interval_rejects_lower_bound() {
        assert!(half_open(0.0).is_err());
        assert!(half_open(0.5).is_ok());
        assert!(half_open(1.0).is_ok());
        match half_open(0.0) {
            Err(ConfigError::OutOfRange { name, interval, .. }) => {
                assert_eq!(name, "value");
                assert_eq!(interval, "(0.0, 1.0]");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn error_names_the_field() {
        struct Holder {
            rate: f32,
        }
        fn check(h: &Holder) -> Result<(), ConfigError> {
            check_interval!(h.rate, 0.0, 1.0);
            Ok(())
        }

        let err = check(&Holder { rate: 3.0 }).unwrap_err();
        match err {
            ConfigError::OutOfRange {
                name,
                value,
                interval,
            } => {
                assert_eq!(name, "rate");
                assert_eq!(value, 3.0);
                assert_eq!(interval, "[0.0, 1.0]");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
