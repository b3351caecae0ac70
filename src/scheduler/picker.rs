use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Choix d'un remplaçant parmi `len` candidats (`len > 0`).
///
/// Seule source d'aléa du planificateur ; les tests la remplacent par
/// une séquence fixe pour obtenir un planning exact.
pub trait FillerPicker {
    /// Renvoie un index dans `0..len`. Une valeur hors bornes est ramenée modulo `len`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Tirage uniforme basé sur `rand`.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Générateur reproductible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FillerPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Séquence d'index rejouée en boucle ; vide = toujours le premier candidat.
#[derive(Debug, Clone, Default)]
pub struct SequencePicker {
    seq: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(seq: Vec<usize>) -> Self {
        Self { seq, cursor: 0 }
    }

    /// Prend toujours le premier disponible, donc l'ordre d'inscription.
    pub fn first_available() -> Self {
        Self::default()
    }
}

impl FillerPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.seq.is_empty() {
            return 0;
        }
        let idx = self.seq[self.cursor % self.seq.len()];
        self.cursor += 1;
        idx % len
    }
}
