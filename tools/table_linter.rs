/// Table Linter — validates suffix-table coverage and cell hygiene.
///
/// Usage: table_linter [<table.ron> ...] [--exceptions <lexicon.ron>]
///
/// With no table arguments, lints the built-in paradigm.

use ojibwe_conjugator::core::lexicon::ExceptionLexicon;
use ojibwe_conjugator::core::suffix_table::{SuffixCell, SuffixTable};
use ojibwe_conjugator::schema::category::{Form, Pronoun, VerbClass};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: table_linter [<table.ron> ...] [--exceptions <lexicon.ron>]");
        process::exit(0);
    }

    let mut table_paths = Vec::new();
    let mut exceptions_path = None;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--exceptions" && i + 1 < args.len() {
            i += 1;
            exceptions_path = Some(args[i].clone());
        } else {
            table_paths.push(args[i].clone());
        }
        i += 1;
    }

    let table = if table_paths.is_empty() {
        match SuffixTable::builtin() {
            Ok(table) => table,
            Err(e) => {
                eprintln!("ERROR: built-in table failed to load: {}", e);
                process::exit(1);
            }
        }
    } else {
        let mut table = SuffixTable::default();
        for path in &table_paths {
            let contents = match std::fs::read_to_string(Path::new(path)) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("ERROR: cannot read '{}': {}", path, e);
                    process::exit(1);
                }
            };
            if let Err(e) = table.merge_ron(&contents) {
                eprintln!("ERROR: '{}': {}", path, e);
                process::exit(1);
            }
        }
        table
    };

    println!("Loaded {} suffix cells", table.len());

    let exceptions = match exceptions_path {
        Some(ref path) => match ExceptionLexicon::load_from_ron(Path::new(path)) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                eprintln!("ERROR: cannot load exception lexicon '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => match ExceptionLexicon::builtin() {
            Ok(lexicon) => lexicon,
            Err(e) => {
                eprintln!("ERROR: built-in exception lexicon failed to load: {}", e);
                process::exit(1);
            }
        },
    };

    let (errors, warnings) = lint(&table, &exceptions);

    println!("\n=== Suffix Table Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn lint(table: &SuffixTable, exceptions: &ExceptionLexicon) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Partition coverage: every cell a rule chain can reach must exist.
    for key in table.missing_cells() {
        errors.push(format!("missing suffix cell for {:?}", key));
    }

    for (key, cell) in table.iter() {
        // Allomorph pairs are only meaningful where the request carries an
        // object number, i.e. for VTI.
        if matches!(cell, SuffixCell::ByObject { .. }) && key.class != VerbClass::Vti {
            errors.push(format!(
                "allomorph pair outside the transitive class: {:?}",
                key
            ));
        }

        // Object-split keys belong to the VTI independent partitions alone.
        if key.object.is_some() && (key.class != VerbClass::Vti || key.form != Form::Independent) {
            errors.push(format!("object-keyed cell outside VTI independent: {:?}", key));
        }

        // Imperative cells for non-commandable pronouns are unreachable.
        if key.form == Form::Imperative && !key.pronoun.can_take_imperative() {
            warnings.push(format!(
                "unreachable imperative cell (pronoun {}): {:?}",
                key.pronoun, key
            ));
        }

        // VII keys must carry inanimate pronouns, and vice versa.
        let wants_inanimate = key.class == VerbClass::Vii;
        if wants_inanimate != key.pronoun.is_inanimate() {
            errors.push(format!("pronoun animacy mismatch: {:?}", key));
        }

        if let SuffixCell::Fixed(suffix) = cell {
            if suffix.chars().any(|c| c.is_whitespace()) {
                errors.push(format!("suffix contains whitespace: {:?}", key));
            }
        }
    }

    if exceptions.for_class(VerbClass::Vii).is_empty() {
        warnings.push("VII exception lexicon is empty; irregular plurals will not fire".into());
    }

    // Spot-check that the irregular-plural target partition exists.
    let has_long_vowel_plural = table.iter().any(|(key, _)| {
        key.class == VerbClass::Vii
            && key.form == Form::Independent
            && key.pronoun == Pronoun::InanimatePlural
    });
    if !has_long_vowel_plural {
        errors.push("no VII independent plural cells at all".into());
    }

    (errors, warnings)
}
