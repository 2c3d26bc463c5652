use anyhow::{Context, Result};
use form_core::{FormSession, calculate, create_form, format_result, is_ready_for_calculation};
use form_model::FormDefinition;
use form_standards::{FormVariant, load_form, load_form_file, load_size_ranges};
use tracing::{info, info_span};

use form_cli::input::apply_assignments;
use form_cli::summary::{errors_table, fields_table, forms_table, readiness_table, result_table};

use crate::cli::{CalculateArgs, CheckArgs, FormArgs};

pub fn run_forms() -> Result<()> {
    let forms = FormVariant::ALL
        .iter()
        .map(|variant| load_form(*variant).with_context(|| format!("load form {variant}")))
        .collect::<Result<Vec<_>>>()?;
    println!("{}", forms_table(&forms));
    Ok(())
}

pub fn run_fields(args: &FormArgs) -> Result<()> {
    let session = open_session(args)?;
    println!("{}", session.definition().title);
    println!("{}", fields_table(&session));
    Ok(())
}

/// Returns whether the filled-in form is valid.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let mut session = open_session(&args.form)?;
    let span = info_span!("check", form = %session.definition().id);
    let _guard = span.enter();

    apply_assignments(&mut session, &args.set)?;
    let outcome = session.submit();
    println!("{}", fields_table(&session));
    match outcome {
        Ok(values) => {
            println!("Form is valid.");
            let json = serde_json::to_string_pretty(&values).context("serialize values")?;
            println!("{json}");
            Ok(true)
        }
        Err(errors) => {
            eprintln!("{}", errors_table(&errors));
            Ok(false)
        }
    }
}

/// Returns whether a result was produced.
pub fn run_calculate(args: &CalculateArgs) -> Result<bool> {
    let form = match &args.form_file {
        Some(path) => load_form_file(path)?,
        None => load_form(FormVariant::YarnCalculator).context("load yarn calculator")?,
    };
    let mut session = new_session(form)?;
    let span = info_span!("calculate", form = %session.definition().id);
    let _guard = span.enter();

    apply_assignments(&mut session, &args.set)?;
    if !session.validate() {
        eprintln!("{}", errors_table(&session.validation_errors()));
        return Ok(false);
    }
    let readiness = is_ready_for_calculation(&session);
    if !readiness.ready {
        eprintln!("{}", readiness_table(&readiness));
        return Ok(false);
    }

    let result = calculate(&session)?;
    info!(packs = result.pack_count, "calculation finished");
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize result")?;
        println!("{json}");
    } else {
        println!("{}", result_table(&result));
        println!("{}", format_result(&result));
    }
    Ok(true)
}

fn open_session(args: &FormArgs) -> Result<FormSession> {
    let form = match &args.form_file {
        Some(path) => load_form_file(path)?,
        None => load_form(args.form).with_context(|| format!("load form {}", args.form))?,
    };
    new_session(form)
}

fn new_session(form: FormDefinition) -> Result<FormSession> {
    let sizes = load_size_ranges().context("load size ranges")?;
    Ok(create_form(form, sizes))
}
