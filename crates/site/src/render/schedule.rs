use site_host::{make_node, Node};

use super::{Labels, SECTION_CLASS};
use crate::content::ContentDocument;

/// Renders the schedule/results section: heading, optional updated line, one heading plus table
/// per season, and an optional trailing note. `None` when the document has no such section.
pub fn render_schedule_results(content: &ContentDocument, labels: &Labels) -> Option<Node> {
    let schedule = content.schedule_results()?;

    let mut container = make_node("section", None, Some(SECTION_CLASS));
    container.append(make_node("h1", schedule.title.truthy_text().as_deref(), None));

    if let Some(updated) = schedule.updated.truthy_text() {
        let line = format!("{}{updated}", labels.updated_prefix);
        container.append(make_node("p", Some(&line), None));
    }

    for season in schedule.seasons.iter().flatten() {
        let heading = format!("{}{}", season.year.display(), labels.season_suffix);
        container.append(make_node("h2", Some(&heading), None));

        let mut table = make_node("table", None, None);
        let mut header = make_node("tr", None, None);
        for label in labels.table_headers {
            header.append(make_node("th", Some(label), None));
        }
        table.append(header);

        for record in season.matches.iter().flatten() {
            let mut row = make_node("tr", None, None);
            for cell in record.cells() {
                row.append(make_node("td", Some(&cell), None));
            }
            table.append(row);
        }
        container.append(table);
    }

    if let Some(note) = schedule.note.truthy_text() {
        container.append(make_node("p", Some(&note), None));
    }

    Some(container)
}
