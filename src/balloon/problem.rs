//! Elementary arithmetic problems

use std::fmt;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

/// A generated problem. Subtraction never goes negative; multiplication
/// stays within the small times table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub a: i32,
    pub b: i32,
    pub op: Op,
}

impl Problem {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => Self {
                a: rng.random_range(1..=10),
                b: rng.random_range(1..=10),
                op: Op::Add,
            },
            1 => {
                let a = rng.random_range(5..=14);
                Self {
                    a,
                    b: rng.random_range(1..a),
                    op: Op::Sub,
                }
            }
            _ => Self {
                a: rng.random_range(1..=5),
                b: rng.random_range(1..=5),
                op: Op::Mul,
            },
        }
    }

    pub fn answer(self) -> i32 {
        match self.op {
            Op::Add => self.a + self.b,
            Op::Sub => self.a - self.b,
            Op::Mul => self.a * self.b,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.op {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "\u{d7}",
        };
        write!(f, "{} {} {}", self.a, symbol, self.b)
    }
}
