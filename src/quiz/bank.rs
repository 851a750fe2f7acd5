use super::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// Fixed table of question templates keyed by title.
#[derive(Debug, Clone)]
pub struct Bank(Vec<Template>);

impl Default for Bank {
    fn default() -> Self {
        Self(vec![
            Template::MERGE,
            Template::PARTY,
            Template::FARM,
            Template::OCEAN,
        ])
    }
}

impl Bank {
    /// Rejects banks that cannot always offer a different title,
    /// and templates whose own numbers are not a valid puzzle.
    pub fn new(templates: Vec<Template>) -> anyhow::Result<Self> {
        let titles = templates.iter().map(|t| t.title).collect::<HashSet<_>>();
        if titles.len() < 2 {
            anyhow::bail!("question bank needs at least 2 distinct titles, got {}", titles.len());
        }
        if let Some(t) = templates.iter().find(|t| !t.question().is_solvable()) {
            anyhow::bail!("template {:?} has no pair summing to {}", t.title, t.target);
        }
        Ok(Self(templates))
    }
    pub fn first(&self) -> &Template {
        self.0.first().expect("bank is never empty")
    }
    pub fn templates(&self) -> &[Template] {
        &self.0
    }
    /// Uniform draw among templates, redrawn until the title differs.
    /// Terminates because construction guarantees a second title.
    pub fn other<R: Rng>(&self, title: &str, rng: &mut R) -> &Template {
        loop {
            let template = self.0.choose(rng).expect("bank is never empty");
            if template.title != title {
                return template;
            }
        }
    }
}
