use site_host::{make_node, Node};

use super::{Labels, SECTION_CLASS};
use crate::content::ContentDocument;

/// Renders the about section: heading, lead, then the principles and history blocks when their
/// arrays are present. `None` when the document has no about section.
pub fn render_about(content: &ContentDocument, labels: &Labels) -> Option<Node> {
    let about = content.about()?;

    let mut container = make_node("section", None, Some(SECTION_CLASS));
    container.append(make_node("h1", about.title.truthy_text().as_deref(), None));
    container.append(make_node("p", about.lead.truthy_text().as_deref(), None));

    if let Some(principles) = &about.principles {
        let mut list = make_node("ul", None, Some("content-list"));
        for principle in principles {
            list.append(
                make_node("li", None, None)
                    .with_child(make_node(
                        "strong",
                        principle.title.truthy_text().as_deref(),
                        None,
                    ))
                    .with_child(make_node("p", principle.body.truthy_text().as_deref(), None)),
            );
        }
        container.append(make_node("h2", Some(labels.principles), None));
        container.append(list);
    }

    if let Some(history) = &about.history {
        let mut wrapper = make_node("div", None, Some("content-history"));
        wrapper.append(make_node("h2", Some(labels.history), None));
        for entry in history {
            let line = format!("{} - {}", entry.year.display(), entry.detail.display());
            wrapper.append(make_node("p", Some(&line), None));
        }
        container.append(wrapper);
    }

    Some(container)
}
