use std::fmt;

/// Renders a value with three decimals, rounding ties away from zero.
///
/// Rounding works on the shortest decimal form of the value, so `0.0625`
/// prints as `0.063` rather than the `0.062` that `{:.3}` gives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Millis(pub f64);

const DECIMALS: usize = 3;

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{:.3}", self.0);
        }

        let shortest = self.0.abs().to_string();
        let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

        let mut digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(DECIMALS))
            .map(|b| b - b'0')
            .collect();

        if frac_part.as_bytes().get(DECIMALS).is_some_and(|&b| b >= b'5') {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if !carry {
                    break;
                }
                *digit += 1;
                carry = *digit == 10;
                if carry {
                    *digit = 0;
                }
            }
            if carry {
                digits.insert(0, 1);
            }
        }

        let split = digits.len() - DECIMALS;
        let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let sign = if self.0.is_sign_negative() && digits.iter().any(|&d| d != 0) {
            "-"
        } else {
            ""
        };
        write!(f, "{}{}.{}", sign, &text[..split], &text[split..])
    }
}
