//! The `eval` command - call one Array function.

use arrkit_core::{
    ArrayOptions, Arrays, Equivalence, Loose, Package, Strict, Value, build_array_package,
};

use crate::cli::EvalArgs;
use crate::common::{CliResult, json::parse_argument};

/// Run the eval command.
pub fn run(args: EvalArgs) -> CliResult<()> {
    let values = args
        .args
        .iter()
        .enumerate()
        .map(|(i, text)| parse_argument(i + 1, text))
        .collect::<CliResult<Vec<Value>>>()?;

    let options = ArrayOptions::default().with_override(&args.overrides());
    tracing::debug!(function = %args.function, strict = args.strict, ?options, "Evaluating");

    let result = if args.strict {
        call(Strict, options, &args.function, &values)?
    } else {
        call(Loose, options, &args.function, &values)?
    };

    println!("{}", result);
    Ok(())
}

/// Call `function` from the Array package under the given equivalence.
pub fn call<E: Equivalence>(
    equivalence: E,
    options: ArrayOptions,
    function: &str,
    args: &[Value],
) -> CliResult<Value> {
    let package: Package<E> = build_array_package();
    let arrays = Arrays::with_equivalence(equivalence, options);
    Ok(package.call(function, &arrays, args)?)
}
