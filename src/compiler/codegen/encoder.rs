//! Operand and literal encodings of the decimal word machine.
//!
//! Every word is a short decimal string. A full operand is the value printed
//! as eight zero padded digits and cut into four pairs, most significant
//! pair first. Immediate integers travel through the short `LH` form, which
//! carries a 16-bit two's complement value as two decimal bytes.

use std::rc::Rc;

use crate::compiler::syntax::ast::crumb::Literal;
use crate::constants::common::MAX_OPERAND;
use crate::constants::common::OPERAND_DIGITS;
use crate::constants::common::OPERAND_WORDS;
use crate::CompileResult;

use super::err::CodegenError;
use super::opcode::Opcode;

/// # Errors
pub fn encode_operand(value: u32) -> CompileResult<[String; OPERAND_WORDS]> {
    if value > MAX_OPERAND {
        return Err(CodegenError::OperandOutOfRange(u64::from(value)).into());
    }
    let digits = format!("{value:0width$}", width = OPERAND_DIGITS);
    Ok(std::array::from_fn(|i| digits[i * 2..i * 2 + 2].to_string()))
}

/// Reads back an operand written by [`encode_operand`].
#[must_use]
pub fn decode_operand(words: &[String]) -> Option<u32> {
    if words.len() != OPERAND_WORDS {
        return None;
    }
    words.concat().parse().ok()
}

/// # Errors
pub fn encode_halfword(value: i64) -> CompileResult<[String; 2]> {
    let Ok(value) = i16::try_from(value) else {
        return Err(CodegenError::LiteralOutOfRange(value).into());
    };
    let [high, low] = value.to_be_bytes();
    Ok([format!("{high:02}"), format!("{low:02}")])
}

/// `LH` followed by the halfword of `value`.
///
/// # Errors
pub fn encode_load_halfword(value: i64) -> CompileResult<Vec<String>> {
    let [high, low] = encode_halfword(value)?;
    Ok(vec![Opcode::LoadHalfword.mnemonic().to_string(), high, low])
}

/// # Errors
pub fn encode_integer_literal(literal: &Rc<Literal>) -> CompileResult<Vec<String>> {
    encode_load_halfword(parse_integer(literal)?)
}

/// `-literal` folded into a single halfword, so `-32768` stays in range.
///
/// # Errors
pub fn encode_negated_integer_literal(literal: &Rc<Literal>) -> CompileResult<Vec<String>> {
    let value = parse_integer(literal)?;
    let negated = value
        .checked_neg()
        .ok_or(CodegenError::LiteralOutOfRange(value))?;
    encode_load_halfword(negated)
}

/// Integer literal pushed and converted, for float targets.
///
/// # Errors
pub fn encode_integer_as_float(literal: &Rc<Literal>) -> CompileResult<Vec<String>> {
    let mut tokens = encode_integer_literal(literal)?;
    tokens.push(Opcode::ToFloat.mnemonic().to_string());
    Ok(tokens)
}

struct FloatParts {
    integer: i64,
    fraction: Option<(i64, i64)>,
}

fn parse_integer(literal: &Rc<Literal>) -> CompileResult<i64> {
    literal
        .parse::<i64>()
        .map_err(|_| CodegenError::IllegalIntegerLiteral(literal.clone()).into())
}

fn split_float(literal: &Rc<Literal>) -> CompileResult<FloatParts> {
    let illegal = || CodegenError::IllegalFloatLiteral(literal.clone());
    let (sign, digits) = match literal.strip_prefix('-') {
        Some(digits) => (-1, digits),
        None => (1, literal.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
        return Err(illegal().into());
    }

    let integer = if integer.is_empty() {
        0
    } else {
        integer.parse::<i64>().map_err(|_| illegal())?
    };
    let fraction = if fraction.is_empty() {
        None
    } else {
        let exponent = u32::try_from(fraction.len()).map_err(|_| illegal())?;
        let divisor = 10i64.checked_pow(exponent).ok_or_else(illegal)?;
        let numerator = fraction.parse::<i64>().map_err(|_| illegal())?;
        Some((sign * numerator, divisor))
    };
    Ok(FloatParts {
        integer: sign * integer,
        fraction,
    })
}

/// Rebuilds a float literal at run time out of integer immediates.
///
/// `3.14` becomes `LH 14, FLT, LH 100, DIV, LH 3, ADD`. Without a fractional
/// part only the integer part is pushed and converted.
///
/// # Errors
pub fn encode_float_literal(literal: &Rc<Literal>) -> CompileResult<Vec<String>> {
    let FloatParts { integer, fraction } = split_float(literal)?;
    let mut tokens = Vec::new();
    match fraction {
        Some((numerator, divisor)) => {
            tokens.extend(encode_load_halfword(numerator)?);
            tokens.push(Opcode::ToFloat.mnemonic().to_string());
            tokens.extend(encode_load_halfword(divisor)?);
            tokens.push(Opcode::Divide.mnemonic().to_string());
            tokens.extend(encode_load_halfword(integer)?);
            tokens.push(Opcode::Add.mnemonic().to_string());
        }
        None => {
            tokens.extend(encode_load_halfword(integer)?);
            tokens.push(Opcode::ToFloat.mnemonic().to_string());
        }
    }
    Ok(tokens)
}
