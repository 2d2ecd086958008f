//! Farewell messages shown when a language is eliminated

use rand::Rng;
use rand::seq::IndexedRandom;

const TEMPLATES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Pick a random farewell line for `language`
///
/// # Examples
/// ```
/// use assembly_endgame::languages::farewell_text;
///
/// let text = farewell_text("Ruby", &mut rand::rng());
/// assert!(text.contains("Ruby"));
/// ```
#[must_use]
pub fn farewell_text<R: Rng + ?Sized>(language: &str, rng: &mut R) -> String {
    let template = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
    template.replace("{}", language)
}

/// Every farewell line for `language`, in template order
#[cfg(test)]
pub(crate) fn all_farewells(language: &str) -> Vec<String> {
    TEMPLATES
        .iter()
        .map(|template| template.replace("{}", language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn farewell_mentions_language() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(farewell_text("TypeScript", &mut rng).contains("TypeScript"));
        }
    }

    #[test]
    fn farewell_is_one_of_the_templates() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = all_farewells("CSS");
        let text = farewell_text("CSS", &mut rng);
        assert!(options.contains(&text));
    }

    #[test]
    fn seeded_farewell_is_deterministic() {
        let first = farewell_text("HTML", &mut StdRng::seed_from_u64(3));
        let second = farewell_text("HTML", &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn all_farewells_fill_every_template() {
        let lines = all_farewells("Python");
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Farewell, Python");
        assert_eq!(lines[11], "Python has left the building");
        assert!(lines.iter().all(|line| !line.contains("{}")));
    }
}
