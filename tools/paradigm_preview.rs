/// Paradigm Preview — prints full conjugation tables for demo stems.
///
/// Usage: paradigm_preview [vai|vii|vti|all] [--stem <stem>] [--plain]
///
/// With --stem, only that stem is conjugated (under the selected class);
/// --plain suppresses ANSI styling.

use ojibwe_conjugator::core::Conjugator;
use ojibwe_conjugator::display;
use ojibwe_conjugator::prefix;
use ojibwe_conjugator::schema::category::{
    Form, ObjectNumber, Polarity, Pronoun, Tense, VerbClass,
};
use ojibwe_conjugator::schema::request::ConjugationRequest;
use std::process;

const VAI_DEMO: &[&str] = &[
    "debisinii",
    "giishkaabaagwe",
    "jiibaakwe",
    "zhoomiingweni",
    "minikwe",
    "nibaa",
    "wiisini",
    "bakade",
    "ashange",
    "ikido",
    "ojibwemo",
    "jiikendam",
];

const VII_DEMO: &[&str] = &[
    "onaagoshin",
    "zoogipon",
    "gimiwan",
    "noodin",
    "aabawaa",
    "dagwaagin",
    "niiskadad",
    "gisinaa",
];

const VTI_DEMO: &[&str] = &["mamoon", "miijin", "giziibiiginan", "ayaan"];

const ANIMATE: &[Pronoun] = &[
    Pronoun::FirstSingular,
    Pronoun::SecondSingular,
    Pronoun::ThirdSingular,
    Pronoun::FirstPluralExclusive,
    Pronoun::FirstPluralInclusive,
    Pronoun::SecondPlural,
    Pronoun::ThirdPlural,
];

const COMMANDABLE: &[Pronoun] = &[
    Pronoun::SecondSingular,
    Pronoun::FirstPluralInclusive,
    Pronoun::SecondPlural,
];

const INANIMATE: &[Pronoun] = &[
    Pronoun::InanimateSingular,
    Pronoun::InanimatePlural,
    Pronoun::InanimateSingularObviative,
    Pronoun::InanimatePluralObviative,
];

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut class_arg = "all".to_string();
    let mut stem = None;
    let mut plain = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("Usage: paradigm_preview [vai|vii|vti|all] [--stem <stem>] [--plain]");
                return;
            }
            "--stem" if i + 1 < args.len() => {
                i += 1;
                stem = Some(args[i].clone());
            }
            "--plain" => plain = true,
            other => class_arg = other.to_string(),
        }
        i += 1;
    }

    let classes: Vec<VerbClass> = match class_arg.as_str() {
        "vai" => vec![VerbClass::Vai],
        "vii" => vec![VerbClass::Vii],
        "vti" => vec![VerbClass::Vti],
        "all" => vec![VerbClass::Vai, VerbClass::Vii, VerbClass::Vti],
        other => {
            eprintln!("Unknown verb class: {}", other);
            process::exit(1);
        }
    };
    if stem.is_some() && classes.len() > 1 {
        eprintln!("--stem needs a single verb class");
        process::exit(1);
    }

    let engine = match Conjugator::new() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: engine failed to assemble: {}", e);
            process::exit(1);
        }
    };

    for class in classes {
        let stems: Vec<&str> = match (&stem, class) {
            (Some(s), _) => vec![s.as_str()],
            (None, VerbClass::Vai) => VAI_DEMO.to_vec(),
            (None, VerbClass::Vii) => VII_DEMO.to_vec(),
            (None, VerbClass::Vti) => VTI_DEMO.to_vec(),
        };
        for s in stems {
            print_paradigm(&engine, class, s, plain);
        }
    }
}

fn print_paradigm(engine: &Conjugator, class: VerbClass, stem: &str, plain: bool) {
    println!("\n=== {} ({}) ===", stem, class.label());

    for form in [Form::Independent, Form::Dependent, Form::Imperative] {
        let pronouns: &[Pronoun] = match (class, form) {
            (VerbClass::Vii, Form::Imperative) => continue,
            (VerbClass::Vii, _) => INANIMATE,
            (_, Form::Imperative) => COMMANDABLE,
            _ => ANIMATE,
        };
        for polarity in [Polarity::Affirmative, Polarity::Negative] {
            println!("  {} {}:", form.label(), polarity.label());
            for &pronoun in pronouns {
                let objects: &[Option<ObjectNumber>] = if class == VerbClass::Vti {
                    &[Some(ObjectNumber::Singular), Some(ObjectNumber::Plural)]
                } else {
                    &[None]
                };
                for &object in objects {
                    let request = ConjugationRequest {
                        class,
                        form,
                        stem: stem.to_string(),
                        pronoun,
                        polarity,
                        object,
                    };
                    // The prefix selector reads the word-initial sound, so
                    // prefixes attach before any styling goes on.
                    let line = match engine.conjugate(&request) {
                        Ok(result) => {
                            match prefix::pronoun_prefix(&result.surface(), class, form, pronoun) {
                                Ok(prefixed) => prefixed
                                    .variants()
                                    .iter()
                                    .map(|word| {
                                        if plain {
                                            (*word).to_string()
                                        } else {
                                            display::decorate(word, result.tag)
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .join(" / "),
                                Err(e) => format!("<{}>", e),
                            }
                        }
                        Err(e) => format!("<{}>", e),
                    };
                    let object_label = match object {
                        Some(ObjectNumber::Singular) => " (sg obj)",
                        Some(ObjectNumber::Plural) => " (pl obj)",
                        None => "",
                    };
                    println!("    {:>4}{}: {}", pronoun.code(), object_label, line);
                }
            }
        }
    }

    // One tense demo line per stem, using the bare independent 1s/0s form.
    let pronoun = if class == VerbClass::Vii {
        Pronoun::InanimateSingular
    } else {
        Pronoun::FirstSingular
    };
    let request = ConjugationRequest {
        class,
        form: Form::Independent,
        stem: stem.to_string(),
        pronoun,
        polarity: Polarity::Affirmative,
        object: (class == VerbClass::Vti).then_some(ObjectNumber::Singular),
    };
    if let Ok(result) = engine.conjugate(&request) {
        let past = prefix::tense_prefix(&result.surface(), pronoun, Tense::Past);
        match prefix::pronoun_prefix(&past, class, Form::Independent, pronoun) {
            Ok(prefixed) => println!("  past: {}", prefixed.variants().join(" / ")),
            Err(e) => println!("  past: <{}>", e),
        }
    }
}
