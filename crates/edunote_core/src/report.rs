use crate::NotesBundle;

/// Lays the bundle out as the fixed-format report handed to the
/// rendering collaborator: labeled sections separated by blank lines.
pub fn assemble(bundle: &NotesBundle) -> String {
    format!(
        "SUMMARY:\n{}\n\nKEY POINTS:\n{}\n\nQUIZ:\n{}\n",
        bundle.summary,
        bundle.key_points.join("\n"),
        bundle.quiz.join("\n"),
    )
}
