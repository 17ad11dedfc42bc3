use forcelab::anyhow::Result;
use forcelab::diagram::Diagram;
use forcelab::diagram::Stroke;
use forcelab::glam::Vec2;
use forcelab::math::vector;
use forcelab::math::vector::ForceSpec;
use forcelab::quiz::Question;
use forcelab::quiz::QuizBook;
use forcelab::utils::color::Palette;

pub const BRIDGE_CABLE_FORCE: f32 = 3.0e4;
pub const BRIDGE_CABLE_ANGLE: f32 = 60.0;

const BRIDGE_SIZE: Vec2 = Vec2::new(300.0, 300.0);
const BRIDGE_ORIGIN: Vec2 = Vec2::new(150.0, 50.0);
const BRIDGE_SCALE: f32 = 100.0 / BRIDGE_CABLE_FORCE;

pub fn concept_questions() -> Result<QuizBook> {
    QuizBook::new(vec![
        Question::true_false(
            "tf-1",
            "(1) The resultant and its components are all forces that really act on the body.",
            false,
            "False. The resultant is an equivalent replacement introduced to simplify the analysis. The body is acted on by the components only, the resultant does not exist on its own.",
        ),
        Question::true_false(
            "tf-2",
            "(2) The resultant F always has the same effect as its components together.",
            true,
            "True. The resultant is defined by producing the same effect.",
        ),
    ])
}

pub fn experiment_questions() -> Result<QuizBook> {
    QuizBook::new(vec![
        Question::single_choice(
            "exp-1",
            "Which research method does this experiment use?",
            &["Controlling variables", "Equivalent substitution", "Idealised experiment", "Graphical method"],
            1,
            "Both times the rubber band has to be stretched to the same point O, so the two pulls have the same effect. That is equivalent substitution.",
        )?,
        Question::single_choice(
            "exp-2",
            "Which statement about the procedure is wrong?",
            &[
                "Zero the spring scales before the experiment",
                "Scales, strings and rubber band must stay parallel to the board",
                "The two spring scales must be at exactly 90° to each other",
                "Read the scale with your eye level to the mark",
            ],
            2,
            "Any reasonable angle between the two pulls works, it does not have to be 90°. Only the effect of both pulls has to be the same.",
        )?,
    ])
}

pub fn summary_questions() -> Result<QuizBook> {
    QuizBook::new(vec![
        Question::single_choice(
            "summary-1",
            "Two concurrent forces have magnitudes 3 N and 5 N. Which value can their resultant have?",
            &["0 N", "10 N", "12 N", "4 N"],
            3,
            "The resultant lies in |5 - 3| ≤ F ≤ 5 + 3, that is 2 N ≤ F ≤ 8 N. Only 4 N is inside this range.",
        )?,
        Question::single_choice(
            "summary-2",
            "Which statement about the triangle rule is correct?",
            &[
                "It follows from the parallelogram rule and is the same in essence",
                "It only works when the two forces are at 90°",
                "Both components must start at the same point",
                "It gives a more accurate resultant than the parallelogram rule",
            ],
            0,
            "The triangle rule and the parallelogram rule are the same geometric rule for adding vectors. The triangle rule just moves one of the vectors to the head of the other.",
        )?,
    ])
}

/// Resultant of the two bridge cables; the rhombus diagonal `2·F·cos(θ/2)`.
pub fn bridge_resultant() -> f32 {
    vector::resultant_magnitude(BRIDGE_CABLE_FORCE, BRIDGE_CABLE_FORCE, BRIDGE_CABLE_ANGLE)
}

/// Two stay cables pulling a pylon point at ±30° from the vertical.
pub fn bridge_diagram(palette: &Palette) -> Diagram {
    let mut diagram = Diagram::new(BRIDGE_SIZE);
    let half = BRIDGE_CABLE_ANGLE / 2.0;

    let right = ForceSpec::new(BRIDGE_CABLE_FORCE * BRIDGE_SCALE, -90.0 + half).to_screen();
    let left = ForceSpec::new(BRIDGE_CABLE_FORCE * BRIDGE_SCALE, -90.0 - half).to_screen();
    let sum = right + left;

    diagram.grid(20.0, Stroke::new(1.0, palette.grid));
    diagram.line(Vec2::new(BRIDGE_ORIGIN.x, 20.0), Vec2::new(BRIDGE_ORIGIN.x, 280.0), Stroke::new(1.0, palette.handle_stroke).dashed(4.0, 4.0));

    diagram.line(BRIDGE_ORIGIN + right, BRIDGE_ORIGIN + sum, Stroke::new(1.0, palette.construction).dashed(4.0, 4.0));
    diagram.line(BRIDGE_ORIGIN + left, BRIDGE_ORIGIN + sum, Stroke::new(1.0, palette.construction).dashed(4.0, 4.0));

    diagram.arrow(BRIDGE_ORIGIN, BRIDGE_ORIGIN + right, Stroke::new(3.0, palette.f2));
    diagram.arrow(BRIDGE_ORIGIN, BRIDGE_ORIGIN + left, Stroke::new(3.0, palette.f2));
    diagram.arrow(BRIDGE_ORIGIN, BRIDGE_ORIGIN + sum, Stroke::new(4.0, palette.resultant));

    diagram.label(BRIDGE_ORIGIN + right + Vec2::new(10.0, 4.0), "F₁", palette.f2, 14.0);
    diagram.label(BRIDGE_ORIGIN + left + Vec2::new(-30.0, 4.0), "F₂", palette.f2, 14.0);
    diagram.label(BRIDGE_ORIGIN + sum + Vec2::new(10.0, -4.0), "F", palette.resultant, 16.0);

    diagram.arc(BRIDGE_ORIGIN, 40.0, -90.0, half, Stroke::new(1.0, palette.muted));
    diagram.arc(BRIDGE_ORIGIN, 40.0, -90.0 - half, half, Stroke::new(1.0, palette.muted));
    diagram.label(BRIDGE_ORIGIN + Vec2::new(15.0, 30.0), format!("{}°", half), palette.muted, 10.0);
    diagram.label(BRIDGE_ORIGIN + Vec2::new(-35.0, 30.0), format!("{}°", half), palette.muted, 10.0);

    diagram.disc(BRIDGE_ORIGIN, 4.0, palette.ink);
    diagram.label_centered(BRIDGE_ORIGIN - Vec2::new(0.0, 10.0), "O", palette.ink, 12.0);

    diagram
}
