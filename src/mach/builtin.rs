use super::{Arity, Call, OpTable, Operation, Operator, Yield};
use crate::error;
use crate::lang::{Error, Token, Value};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in operators
///
/// A fresh table holding every operator the language starts with.
/// Programs may redefine or delete any of them.

pub fn table() -> OpTable {
    let mut ops = OpTable::new();
    ops.insert("noop", Operator::native(Arity::Fixed(0), |_| Ok(Yield::Nothing)));

    ops.insert("+", binary(Operation::sum));
    ops.insert("-", binary(Operation::subtract));
    ops.insert("*", binary(Operation::multiply));
    ops.insert("/", binary(Operation::divide));
    ops.insert("^", binary(Operation::power));
    ops.insert("%", binary(Operation::remainder));
    ops.insert("xor", binary(Operation::xor));
    ops.insert("==", binary(Operation::equal));
    ops.insert("<", binary(Operation::less));
    ops.insert(">", binary(Operation::greater));
    ops.insert(">=", binary(Operation::greater_equal));
    ops.insert("<=", binary(Operation::less_equal));
    ops.insert("and", binary(Operation::and));
    ops.insert("or", binary(Operation::or));
    ops.insert(
        "not",
        Operator::native(Arity::Fixed(1), |call| {
            let [a] = call.operands()?;
            Ok(Token::symbol(Operation::not(&a)?).into())
        }),
    );

    ops.insert("if", Operator::native(Arity::Fixed(3), if_else));
    ops.insert("eval", Operator::native(Arity::Fixed(1), eval));
    ops.insert(
        "print",
        Operator::native(Arity::Fixed(1), |call| {
            let [a] = call.operands()?;
            call.interpreter().print(a.text());
            Ok(Yield::Nothing)
        }),
    );

    ops.insert(
        "dup",
        Operator::native(Arity::Fixed(1), |call| {
            let [a] = call.operands()?;
            Ok(vec![a.clone(), a].into())
        }),
    );
    ops.insert(
        "swap",
        Operator::native(Arity::Fixed(2), |call| {
            let [a, b] = call.operands()?;
            Ok(vec![b, a].into())
        }),
    );
    ops.insert(
        "over",
        Operator::native(Arity::Fixed(2), |call| {
            let [a, b] = call.operands()?;
            Ok(vec![a.clone(), b, a].into())
        }),
    );
    ops.insert(
        "pick",
        Operator::native(Arity::Fixed(3), |call| {
            let [a, b, c] = call.operands()?;
            Ok(vec![a.clone(), b, c, a].into())
        }),
    );
    ops.insert(
        "pop",
        Operator::native(Arity::Variadic, |call| {
            call.pop_or_none();
            Ok(Yield::Nothing)
        }),
    );
    ops.insert(
        "clear",
        Operator::native(Arity::Variadic, |call| {
            call.pop_all();
            Ok(Yield::Nothing)
        }),
    );

    ops.insert("reduce", Operator::native(Arity::Variadic, reduce));
    ops.insert("map", Operator::native(Arity::Variadic, map));
    ops.insert("filter", Operator::native(Arity::Variadic, filter));
    ops.insert("range", Operator::native(Arity::Fixed(3), range));

    ops.insert("define-op", Operator::native(Arity::Fixed(3), define_op));
    ops.insert("alias-op", Operator::native(Arity::Fixed(2), alias_op));
    ops.insert(
        "del-op",
        Operator::native(Arity::Fixed(1), |call| {
            let [name] = call.operands()?;
            let name = name.text();
            if call.interpreter().ops_mut().remove(&name).is_some() {
                debug!("del-op {}", name);
            }
            Ok(Yield::Nothing)
        }),
    );

    ops.insert(
        "store",
        Operator::native(Arity::Fixed(2), |call| {
            let [val, name] = call.operands()?;
            call.interpreter().memory_mut().insert(name.text(), val);
            Ok(Yield::Nothing)
        }),
    );
    ops.insert(
        "load",
        Operator::native(Arity::Fixed(1), |call| {
            let [name] = call.operands()?;
            Ok(call.interpreter().memory().get(&name.text()).cloned().into())
        }),
    );
    ops.insert(
        "delete",
        Operator::native(Arity::Fixed(1), |call| {
            let [name] = call.operands()?;
            call.interpreter().memory_mut().remove(&name.text());
            Ok(Yield::Nothing)
        }),
    );
    ops.insert(
        "pack",
        Operator::native(Arity::Variadic, |call| {
            let text = call
                .pop_all()
                .iter()
                .map(Token::serialize)
                .collect::<Vec<_>>()
                .join(" ");
            Ok(Token::symbol(Value::String(text)).into())
        }),
    );
    ops
}

fn binary(f: fn(&Token, &Token) -> Result<Value>) -> Operator {
    Operator::native(Arity::Fixed(2), move |call| {
        let [a, b] = call.operands()?;
        Ok(Token::symbol(f(&a, &b)?).into())
    })
}

fn eval(call: &mut Call) -> Result<Yield> {
    let [code] = call.operands()?;
    call.interpreter().evaluate_token(&code)?;
    Ok(Yield::Nothing)
}

/// Runs the condition, consumes its result, then runs exactly one branch.
fn if_else(call: &mut Call) -> Result<Yield> {
    let [condition, then, otherwise] = call.operands()?;
    call.interpreter().evaluate_token(&condition)?;
    let branch = if call.pop()?.truthy() {
        then
    } else {
        otherwise
    };
    call.interpreter().evaluate_token(&branch)?;
    Ok(Yield::Nothing)
}

/// Resolves the operator a combinator applies. The returned token names
/// it at the position the name was written, for diagnostics.
fn target(call: &mut Call, combinator: &str, wanted: usize) -> Result<(Operator, Token)> {
    let mut args = call.pop_args(&["op"])?;
    let name = args.remove(0);
    let caller = Token::operator(&name.text()).at(name.span().cloned());
    let op = call.interpreter().operator(&caller)?;
    if op.arity() != Arity::Fixed(wanted) {
        return Err(error!(ArityMismatch, ..caller.span().cloned();
            "A {} operator must accept {} {}; \"{}\" requires {}",
            combinator,
            wanted,
            if wanted == 1 { "operand" } else { "operands" },
            caller.text(),
            op.arity()));
    }
    Ok((op, caller))
}

/// Invokes `op` on a stack holding only its operands and takes back its
/// single result.
fn apply(call: &mut Call, op: &Operator, caller: &Token, label: &str) -> Result<Token> {
    let interpreter = call.interpreter();
    interpreter.invoke(op, caller)?;
    let mut results = interpreter.stack_mut().drain();
    if results.len() > 1 {
        return Err(error!(ContractViolation, ..caller.span().cloned();
            "{} operator \"{}\" left too many values on the stack.", label, caller.text()));
    }
    results.pop().ok_or_else(|| {
        error!(ContractViolation, ..caller.span().cloned();
            "{} operator \"{}\" didn't leave a value on the stack.", label, caller.text())
    })
}

fn reduce(call: &mut Call) -> Result<Yield> {
    let (op, caller) = target(call, "reduce", 2)?;
    let mut all = call.pop_all().into_iter();
    let mut acc = match all.next() {
        Some(first) => first,
        None => return Ok(Yield::Nothing),
    };
    for next in all {
        call.push(acc);
        call.push(next);
        acc = apply(call, &op, &caller, "Reduce")?;
    }
    Ok(acc.into())
}

fn map(call: &mut Call) -> Result<Yield> {
    let (op, caller) = target(call, "map", 1)?;
    let all = call.pop_all();
    let mut results = Vec::with_capacity(all.len());
    for item in all {
        call.push(item);
        results.push(apply(call, &op, &caller, "Map")?);
    }
    Ok(results.into())
}

fn filter(call: &mut Call) -> Result<Yield> {
    let (op, caller) = target(call, "filter", 1)?;
    let all = call.pop_all();
    let mut kept = vec![];
    for item in all {
        call.push(item.clone());
        if apply(call, &op, &caller, "Filter")?.truthy() {
            kept.push(item);
        }
    }
    Ok(kept.into())
}

/// Most values one `range` may push.
const RANGE_LIMIT: usize = 1 << 24;

fn range(call: &mut Call) -> Result<Yield> {
    let [start, end, step] = call.operands()?;
    let number = |token: &Token, what: &str| match token.value() {
        Value::Number(n) => Ok(*n),
        _ => Err(error!(TypeMismatch, ..token.span().cloned();
            "range operator expects numerical value for {}", what)),
    };
    let (first, last, stride) = (
        number(&start, "start")?,
        number(&end, "end")?,
        number(&step, "step")?.abs(),
    );
    if !first.is_finite() || !last.is_finite() {
        return Err(error!(ContractViolation, ..call.caller().span().cloned();
            "range operator expects finite values for start and end"));
    }
    if stride == 0.0 || !stride.is_finite() {
        return Err(error!(ContractViolation, ..step.span().cloned();
            "range operator expects a non-zero finite step"));
    }
    let steps = ((last - first).abs() / stride).floor();
    if steps > RANGE_LIMIT as f64 {
        return Err(error!(ContractViolation, ..step.span().cloned();
            "range operator would produce {} values, the limit is {}", steps, RANGE_LIMIT));
    }
    let direction = (last - first).signum();
    let count = steps as usize;
    let mut val = first;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(Token::symbol(Value::Number(val)));
        val += direction * stride;
    }
    Ok(values.into())
}

fn parse_arity(token: &Token) -> Result<Arity> {
    match token.value() {
        Value::Number(n) if *n >= 0.0 && n.fract() == 0.0 && n.is_finite() => {
            Ok(Arity::Fixed(*n as usize))
        }
        Value::String(s) if s == "none" => Ok(Arity::Variadic),
        _ => Err(error!(TypeMismatch, ..token.span().cloned();
            "Invalid arity value {}\nMust be a non-negative integer or \"none\".",
            token.serialize())),
    }
}

/// `'name arity (code) define-op`
fn define_op(call: &mut Call) -> Result<Yield> {
    let [name, arity, code] = call.operands()?;
    let arity = parse_arity(&arity)?;
    let name = name.text();
    debug!("define-op {} arity {}: {}", name, arity, code.source());
    call.interpreter()
        .ops_mut()
        .insert(&name, Operator::defined(arity, code));
    Ok(Yield::Nothing)
}

/// `'old 'new alias-op`
fn alias_op(call: &mut Call) -> Result<Yield> {
    let [old, new] = call.operands()?;
    let op = call.interpreter().operator(&old)?;
    debug!("alias-op {} as {}", old.text(), new.text());
    call.interpreter().ops_mut().insert(&new.text(), op);
    Ok(Yield::Nothing)
}
