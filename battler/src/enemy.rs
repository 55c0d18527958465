use models::EnemyActionSpec;
use rand::{Rng, rngs::StdRng};

/// The enemy's scripted action list. Selection is uniform but never
/// repeats the immediately-previous pick when more than one action is
/// configured.
#[derive(Clone, Debug)]
pub struct EnemyActionSet {
    actions: Vec<EnemyActionSpec>,
    last_selected: Option<usize>,
}

impl EnemyActionSet {
    pub fn new(actions: Vec<EnemyActionSpec>) -> anyhow::Result<Self> {
        if actions.is_empty() {
            anyhow::bail!("enemy has no actions configured");
        }
        Ok(Self {
            actions,
            last_selected: None,
        })
    }

    pub fn actions(&self) -> &[EnemyActionSpec] {
        &self.actions
    }

    pub fn last_selected(&self) -> Option<usize> {
        self.last_selected
    }

    pub fn select(&mut self, rng: &mut StdRng) -> EnemyActionSpec {
        if self.actions.len() == 1 {
            self.last_selected = Some(0);
            return self.actions[0].clone();
        }
        // Rejection sampling: redraw until the index differs from the
        // previous selection.
        let mut index = rng.random_range(0..self.actions.len());
        while Some(index) == self.last_selected {
            index = rng.random_range(0..self.actions.len());
        }
        self.last_selected = Some(index);
        self.actions[index].clone()
    }
}
