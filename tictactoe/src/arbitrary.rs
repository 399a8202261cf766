use quickcheck::{Arbitrary, Gen};

use crate::MAX_SIZE;

/// A board size together with a sequence of move choices.
///
/// Each choice is reduced modulo the number of legal moves at the time it is
/// used, so every script describes a valid game prefix.
#[derive(Clone, Debug)]
pub struct MoveScript {
    pub size: usize,
    pub choices: Vec<usize>,
}

impl Arbitrary for MoveScript {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = (u8::arbitrary(g) as usize % MAX_SIZE) + 1;
        let len = usize::arbitrary(g) % (size * size + 1);
        let choices = (0..len).map(|_| u8::arbitrary(g) as usize).collect();
        MoveScript { size, choices }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let size = self.size;
        Box::new(
            self.choices
                .shrink()
                .map(move |choices| MoveScript { size, choices }),
        )
    }
}
