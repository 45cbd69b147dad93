use crate::error;
use crate::lang::{Error, Token, Value};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    fn number(token: &Token) -> Result<f64> {
        match token.value() {
            Value::Number(n) => Ok(*n),
            v => Err(error!(TypeMismatch, ..token.span().cloned();
                "expected a number but found {} {}", v.type_name(), token.serialize())),
        }
    }

    fn numbers(lhs: &Token, rhs: &Token) -> Result<(f64, f64)> {
        Ok((Operation::number(lhs)?, Operation::number(rhs)?))
    }

    /// Numbers add; if either side is a string both are joined as text.
    pub fn sum(lhs: &Token, rhs: &Token) -> Result<Value> {
        use Value::*;
        match (lhs.value(), rhs.value()) {
            (String(_), _) | (_, String(_)) => Ok(String(lhs.text() + &rhs.text())),
            _ => {
                let (l, r) = Operation::numbers(lhs, rhs)?;
                Ok(Number(l + r))
            }
        }
    }

    pub fn subtract(lhs: &Token, rhs: &Token) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l - r))
    }

    pub fn multiply(lhs: &Token, rhs: &Token) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l * r))
    }

    pub fn divide(lhs: &Token, rhs: &Token) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l / r))
    }

    pub fn power(lhs: &Token, rhs: &Token) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l.powf(r)))
    }

    /// Sign follows the dividend.
    pub fn remainder(lhs: &Token, rhs: &Token) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l % r))
    }

    /// Bitwise xor of both operands truncated to 32-bit integers.
    pub fn xor(lhs: &Token, rhs: &Token) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number((int32(l) ^ int32(r)) as f64))
    }

    pub fn equal(lhs: &Token, rhs: &Token) -> Result<Value> {
        Ok(Value::Boolean(lhs.value() == rhs.value()))
    }

    fn compare(lhs: &Token, rhs: &Token) -> Result<Option<Ordering>> {
        use Value::*;
        match (lhs.value(), rhs.value()) {
            (Number(l), Number(r)) => Ok(l.partial_cmp(r)),
            (String(l), String(r)) => Ok(Some(l.cmp(r))),
            (Boolean(l), Boolean(r)) => Ok(Some(l.cmp(r))),
            (l, r) => Err(error!(TypeMismatch, ..rhs.span().cloned();
                "cannot compare {} {} with {} {}",
                l.type_name(), lhs.serialize(), r.type_name(), rhs.serialize())),
        }
    }

    pub fn less(lhs: &Token, rhs: &Token) -> Result<Value> {
        let ord = Operation::compare(lhs, rhs)?;
        Ok(Value::Boolean(ord == Some(Ordering::Less)))
    }

    pub fn greater(lhs: &Token, rhs: &Token) -> Result<Value> {
        let ord = Operation::compare(lhs, rhs)?;
        Ok(Value::Boolean(ord == Some(Ordering::Greater)))
    }

    pub fn less_equal(lhs: &Token, rhs: &Token) -> Result<Value> {
        let ord = Operation::compare(lhs, rhs)?;
        Ok(Value::Boolean(matches!(ord, Some(Ordering::Less | Ordering::Equal))))
    }

    pub fn greater_equal(lhs: &Token, rhs: &Token) -> Result<Value> {
        let ord = Operation::compare(lhs, rhs)?;
        Ok(Value::Boolean(matches!(ord, Some(Ordering::Greater | Ordering::Equal))))
    }

    pub fn not(val: &Token) -> Result<Value> {
        Ok(Value::Boolean(!val.truthy()))
    }

    /// The left operand if it is falsy, otherwise the right.
    pub fn and(lhs: &Token, rhs: &Token) -> Result<Value> {
        if lhs.truthy() {
            Ok(rhs.value().clone())
        } else {
            Ok(lhs.value().clone())
        }
    }

    /// The left operand if it is truthy, otherwise the right.
    pub fn or(lhs: &Token, rhs: &Token) -> Result<Value> {
        if lhs.truthy() {
            Ok(lhs.value().clone())
        } else {
            Ok(rhs.value().clone())
        }
    }
}

fn int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32 as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn num(n: f64) -> Token {
        Token::symbol(n.into())
    }

    #[test]
    fn test_operand_order() {
        assert_eq!(Operation::subtract(&num(3.0), &num(2.0)).unwrap(), Value::Number(1.0));
        assert_eq!(Operation::divide(&num(1.0), &num(4.0)).unwrap(), Value::Number(0.25));
        assert_eq!(Operation::power(&num(2.0), &num(10.0)).unwrap(), Value::Number(1024.0));
        assert_eq!(Operation::remainder(&num(-7.0), &num(3.0)).unwrap(), Value::Number(-1.0));
    }

    #[test]
    fn test_sum_joins_strings() {
        let s = Token::symbol("ab".into());
        assert_eq!(Operation::sum(&s, &num(1.0)).unwrap(), Value::String("ab1".into()));
        assert_eq!(Operation::sum(&num(1.5), &s).unwrap(), Value::String("1.5ab".into()));
    }

    #[test]
    fn test_type_mismatch_points_at_operand() {
        let b = Token::symbol(true.into()).at(Some(4..8));
        let e = Operation::multiply(&num(2.0), &b).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        assert_eq!(e.span(), Some(&(4..8)));
    }

    #[test]
    fn test_xor() {
        assert_eq!(Operation::xor(&num(5.0), &num(3.0)).unwrap(), Value::Number(6.0));
        assert_eq!(Operation::xor(&num(5.9), &num(-1.0)).unwrap(), Value::Number(-6.0));
        assert_eq!(int32(4_294_967_297.0), 1);
        assert_eq!(int32(f64::NAN), 0);
    }

    #[test]
    fn test_compare() {
        assert_eq!(Operation::less(&num(1.0), &num(2.0)).unwrap(), Value::Boolean(true));
        assert_eq!(Operation::greater_equal(&num(2.0), &num(2.0)).unwrap(), Value::Boolean(true));
        assert_eq!(Operation::less(&num(f64::NAN), &num(2.0)).unwrap(), Value::Boolean(false));
        assert_eq!(Operation::equal(&num(1.0), &Token::symbol("1".into())).unwrap(), Value::Boolean(false));
        assert!(Operation::less(&num(1.0), &Token::symbol("a".into())).is_err());
    }

    #[test]
    fn test_and_or_return_operand() {
        let zero = num(0.0);
        let s = Token::symbol("x".into());
        assert_eq!(Operation::and(&zero, &s).unwrap(), Value::Number(0.0));
        assert_eq!(Operation::and(&s, &zero).unwrap(), Value::Number(0.0));
        assert_eq!(Operation::or(&zero, &s).unwrap(), Value::String("x".into()));
        assert_eq!(Operation::not(&zero).unwrap(), Value::Boolean(true));
    }
}
