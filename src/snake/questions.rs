//! Built-in geometry question banks
//!
//! Five questions per grade. The mechanics (no-repeat draws, gating) are
//! core; this content is plain data and can be swapped wholesale.

use super::state::{Grade, Question};

const fn q(prompt: &'static str, choices: [&'static str; 4], correct: usize) -> Question {
    Question {
        prompt,
        choices,
        correct,
    }
}

/// The question bank for a grade.
pub fn bank(grade: Grade) -> Vec<Question> {
    match grade {
        Grade::Three => vec![
            q("How many corners does a square have?", ["3", "4", "5", "0"], 1),
            q("How many sides does a triangle have?", ["4", "3", "2", "5"], 1),
            q(
                "Which shape has no corners?",
                ["Square", "Triangle", "Circle", "Rectangle"],
                2,
            ),
            q("How many faces does a cube have?", ["4", "5", "6", "8"], 2),
            q(
                "How many right angles does a rectangle have?",
                ["2", "3", "4", "0"],
                2,
            ),
        ],
        Grade::Four => vec![
            q(
                "How many degrees is a right angle?",
                ["45", "90", "180", "60"],
                1,
            ),
            q(
                "The opening between two rays is called a(n)...",
                ["Line", "Angle", "Point", "Plane"],
                1,
            ),
            q(
                "Which could be the measure of an acute angle?",
                ["90", "120", "80", "180"],
                2,
            ),
            q(
                "A square's perimeter is how many times one side?",
                ["2", "3", "4", "1"],
                2,
            ),
            q(
                "An obtuse angle is greater than...",
                ["90", "180", "270", "360"],
                0,
            ),
        ],
        Grade::Five => vec![
            q(
                "The interior angles of a triangle sum to...",
                ["90", "180", "360", "270"],
                1,
            ),
            q(
                "The interior angles of a quadrilateral sum to...",
                ["180", "360", "270", "540"],
                1,
            ),
            q(
                "Each angle of an equilateral triangle measures...",
                ["45", "90", "60", "30"],
                2,
            ),
            q(
                "Which triangle has all sides equal?",
                ["Scalene", "Isosceles", "Equilateral", "Right"],
                2,
            ),
            q(
                "Two angles summing to 180 degrees are called...",
                ["Complementary", "Supplementary", "Vertical", "Alternate"],
                1,
            ),
        ],
        Grade::Six => vec![
            q(
                "The area of a parallelogram is...",
                ["a*b", "base*height", "(a+b)*h/2", "pi*r^2"],
                1,
            ),
            q(
                "The longest chord through a circle's center is the...",
                ["Radius", "Arc", "Diameter", "Tangent"],
                2,
            ),
            q(
                "A ray splitting an angle into two equal parts is a(n)...",
                ["Median", "Bisector", "Altitude", "Segment"],
                1,
            ),
            q(
                "The area of a right triangle is...",
                ["a*b", "(a*b)/2", "a+b+c", "a^2"],
                1,
            ),
            q(
                "Two complementary angles sum to...",
                ["45", "90", "180", "360"],
                1,
            ),
        ],
        Grade::Seven => vec![
            q(
                "The area of a circle is...",
                ["2*pi*r", "pi*r^2", "pi*d", "2*pi*d"],
                1,
            ),
            q(
                "The exterior angles of any polygon sum to...",
                ["180", "360", "540", "720"],
                1,
            ),
            q(
                "Each interior angle of a regular pentagon is...",
                ["72", "108", "90", "120"],
                1,
            ),
            q(
                "The area of a trapezoid is...",
                ["a*h", "(a+b)*h/2", "a*b", "pi*r^2"],
                1,
            ),
            q(
                "A rhombus's diagonals intersect...",
                ["Parallel", "Perpendicular", "Coincident", "Straight"],
                1,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grade_has_five_questions() {
        for grade in Grade::ALL {
            let bank = bank(grade);
            assert_eq!(bank.len(), 5, "{grade:?}");
            for question in &bank {
                assert!(question.correct < question.choices.len());
            }
        }
    }
}
