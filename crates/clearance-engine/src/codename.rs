//! Synthetic codename generator
//!
//! Alternative to the template catalog for events that want fresh
//! codenames every time: `"<Adjective> <Noun>-<NN>"`. Synthetic agents
//! carry no achievement or backstory.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Crimson", "Silent", "Midnight", "Velvet", "Hollow", "Neon", "Arctic", "Golden", "Phantom",
    "Iron", "Electric", "Shadow", "Lucky", "Wandering", "Burning", "Polar",
];

const NOUNS: &[&str] = &[
    "Falcon", "Viper", "Sparrow", "Lantern", "Compass", "Cello", "Anthem", "Harbor", "Mirage",
    "Signal", "Baton", "Chorus", "Tempo", "Crescendo", "Encore", "Octave",
];

/// Generate a codename like `"Velvet Encore-07"`.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let serial: u32 = rng.gen_range(0..100);

    format!("{adjective} {noun}-{serial:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shape() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            let name = synthesize(&mut rng);

            let (head, serial) = name.rsplit_once('-').expect("serial suffix");
            assert_eq!(serial.len(), 2);
            assert!(serial.chars().all(|c| c.is_ascii_digit()));

            let (adjective, noun) = head.split_once(' ').expect("two words");
            assert!(ADJECTIVES.contains(&adjective));
            assert!(NOUNS.contains(&noun));
        }
    }

    #[test]
    fn test_deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(21);
        let mut b = StdRng::seed_from_u64(21);

        for _ in 0..50 {
            assert_eq!(synthesize(&mut a), synthesize(&mut b));
        }
    }
}
