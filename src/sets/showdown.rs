// src/sets/showdown.rs
// Showdown-style set text, the format the editor's paste-import understands.

use std::fmt;

use super::fragment::CompetitiveSetFragment;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalSetText {
    lines: Vec<String>,
}

impl CanonicalSetText {
    /// Header, ability, EVs, IVs, nature, then one line per move.
    /// A fragment without a nature simply has no nature line.
    pub fn from_fragment(label: &str, frag: &CompetitiveSetFragment) -> Self {
        let mut lines = Vec::with_capacity(5 + frag.moves.len());
        lines.push(match &frag.item {
            Some(item) => format!("{label} @ {item}"),
            None => s!(label),
        });
        lines.push(join!("Ability: ", &frag.ability));
        lines.push(format!("EVs: {}", frag.evs));
        lines.push(format!("IVs: {}", frag.ivs));
        if let Some(nature) = &frag.nature {
            lines.push(join!(nature, " Nature"));
        }
        lines.extend(frag.moves.iter().map(|m| join!("- ", m)));
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for CanonicalSetText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// All sets, separated by one blank line.
pub fn aggregate(sets: &[CanonicalSetText]) -> String {
    sets.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sets::StatTable;

    fn frag() -> CompetitiveSetFragment {
        CompetitiveSetFragment {
            ability: s!("Rough Skin"),
            item: Some(s!("Choice Scarf")),
            moves: vec![s!("Earthquake"), s!("Outrage")],
            nature: Some(s!("Jolly")),
            evs: StatTable([0, 252, 0, 0, 4, 252]),
            ivs: StatTable::IV_DEFAULT,
        }
    }

    #[test]
    fn renders_in_order() {
        let text = CanonicalSetText::from_fragment("Garchomp", &frag()).to_string();
        assert_eq!(
            text,
            "Garchomp @ Choice Scarf\n\
             Ability: Rough Skin\n\
             EVs: 0 HP / 252 Atk / 0 Def / 0 SpA / 4 SpD / 252 Spe\n\
             IVs: 31 HP / 31 Atk / 31 Def / 31 SpA / 31 SpD / 31 Spe\n\
             Jolly Nature\n\
             - Earthquake\n\
             - Outrage"
        );
    }

    #[test]
    fn no_item_no_at_sign() {
        let mut f = frag();
        f.item = None;
        let set = CanonicalSetText::from_fragment("Garchomp", &f);
        assert_eq!(set.lines()[0], "Garchomp");
    }

    #[test]
    fn no_nature_no_nature_line() {
        let mut f = frag();
        f.nature = None;
        let set = CanonicalSetText::from_fragment("Garchomp", &f);
        assert_eq!(set.lines().len(), 6);
        assert!(!set.lines().iter().any(|l| l.ends_with("Nature")));
        assert_eq!(set.lines()[4], "- Earthquake");
    }

    #[test]
    fn different_fragments_render_differently() {
        let a = CanonicalSetText::from_fragment("Garchomp", &frag());
        let mut f = frag();
        f.evs = StatTable([4, 252, 0, 0, 0, 252]);
        let b = CanonicalSetText::from_fragment("Garchomp", &f);
        assert_ne!(a, b);
    }

    #[test]
    fn aggregate_blank_line_between_sets() {
        let a = CanonicalSetText::from_fragment("A", &frag());
        let b = CanonicalSetText::from_fragment("B", &frag());
        let all = aggregate(&[a.clone(), b]);
        assert!(all.starts_with(&a.to_string()));
        assert!(all.contains("- Outrage\n\nB @ Choice Scarf"));
        assert!(!all.ends_with('\n'));
    }
}
