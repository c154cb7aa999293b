//! Label-proximity field extraction.
//!
//! Registry pages render each field as a label element followed by a value
//! element, e.g. `<dt>ИНН</dt><dd>301234567</dd>`. Extraction finds the label
//! text node, climbs to its enclosing element and reads the next element
//! sibling. The walk is best-effort: any missing step yields `None`.
//!
//! The walk only depends on [`DocumentTree`], so it can be exercised with
//! synthetic trees. The HTML-backed tree lives in
//! [`crate::infrastructure::markup`].

use crate::domain::entities::OrganizationRecord;

pub const TAX_ID_LABEL: &str = "ИНН";
pub const STATUS_LABEL: &str = "Статус";
pub const REGISTRATION_DATE_LABEL: &str = "Дата регистрации";
pub const ADDRESS_LABEL: &str = "Адрес";
pub const DIRECTOR_LABEL: &str = "Руководитель";

/// Spellings of the charter capital label, tried in order.
pub const CHARTER_CAPITAL_LABELS: [&str; 3] = ["Уставной фонд", "Уставный фонд", "Уставной капитал"];

/// Minimal read-only view of a parsed document.
pub trait DocumentTree {
    /// Opaque node handle.
    type Node: Copy;

    /// First level-1 heading in document order.
    fn first_heading(&self) -> Option<Self::Node>;

    /// First text node in document order whose trimmed content equals `text`.
    fn find_text_node(&self, text: &str) -> Option<Self::Node>;

    /// Enclosing node.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Next sibling that is an element, skipping text and comments.
    fn next_element_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Descendant text with every piece trimmed and concatenated.
    fn stripped_text(&self, node: Self::Node) -> String;
}

/// Extracts an [`OrganizationRecord`] from a document.
pub fn extract_record<T: DocumentTree>(tree: &T) -> OrganizationRecord {
    let name = tree
        .first_heading()
        .and_then(|heading| non_empty(tree.stripped_text(heading)));

    let charter_capital = CHARTER_CAPITAL_LABELS
        .iter()
        .find_map(|label| label_value(tree, label));

    OrganizationRecord {
        name,
        tax_id: label_value(tree, TAX_ID_LABEL),
        status: label_value(tree, STATUS_LABEL),
        registration_date: label_value(tree, REGISTRATION_DATE_LABEL),
        address: label_value(tree, ADDRESS_LABEL),
        director_name: label_value(tree, DIRECTOR_LABEL),
        charter_capital,
    }
}

/// Reads the value element that follows `label`.
///
/// label text node -> enclosing element -> next element sibling -> text
pub fn label_value<T: DocumentTree>(tree: &T, label: &str) -> Option<String> {
    let label_node = tree.find_text_node(label)?;
    let enclosing = tree.parent(label_node)?;
    let value = tree.next_element_sibling(enclosing)?;
    non_empty(tree.stripped_text(value))
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-built tree: each node has an optional parent, a kind and children.
    #[derive(Default)]
    struct FakeTree {
        nodes: Vec<FakeNode>,
    }

    struct FakeNode {
        parent: Option<usize>,
        tag: Option<&'static str>,
        text: Option<&'static str>,
        children: Vec<usize>,
    }

    impl FakeTree {
        fn add(
            &mut self,
            parent: Option<usize>,
            tag: Option<&'static str>,
            text: Option<&'static str>,
        ) -> usize {
            let id = self.nodes.len();
            self.nodes.push(FakeNode {
                parent,
                tag,
                text,
                children: Vec::new(),
            });
            if let Some(p) = parent {
                self.nodes[p].children.push(id);
            }
            id
        }

        fn element(&mut self, parent: usize, tag: &'static str) -> usize {
            self.add(Some(parent), Some(tag), None)
        }

        fn text(&mut self, parent: Option<usize>, text: &'static str) -> usize {
            self.add(parent, None, Some(text))
        }

        fn order(&self) -> Vec<usize> {
            let mut out = Vec::new();
            let mut stack: Vec<usize> = self
                .nodes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.parent.is_none())
                .map(|(i, _)| i)
                .rev()
                .collect();
            while let Some(id) = stack.pop() {
                out.push(id);
                stack.extend(self.nodes[id].children.iter().rev());
            }
            out
        }
    }

    impl DocumentTree for FakeTree {
        type Node = usize;

        fn first_heading(&self) -> Option<usize> {
            self.order()
                .into_iter()
                .find(|&id| self.nodes[id].tag == Some("h1"))
        }

        fn find_text_node(&self, text: &str) -> Option<usize> {
            self.order()
                .into_iter()
                .find(|&id| self.nodes[id].text.is_some_and(|t| t.trim() == text))
        }

        fn parent(&self, node: usize) -> Option<usize> {
            self.nodes[node].parent
        }

        fn next_element_sibling(&self, node: usize) -> Option<usize> {
            let parent = self.nodes[node].parent?;
            let siblings = &self.nodes[parent].children;
            let pos = siblings.iter().position(|&s| s == node)?;
            siblings[pos + 1..]
                .iter()
                .copied()
                .find(|&s| self.nodes[s].tag.is_some())
        }

        fn stripped_text(&self, node: usize) -> String {
            let mut out = String::new();
            let mut stack = vec![node];
            while let Some(id) = stack.pop() {
                if let Some(t) = self.nodes[id].text {
                    out.push_str(t.trim());
                }
                stack.extend(self.nodes[id].children.iter().rev());
            }
            out
        }
    }

    fn labelled_row(tree: &mut FakeTree, list: usize, label: &'static str, value: &'static str) {
        let dt = tree.element(list, "dt");
        tree.text(Some(dt), label);
        tree.text(Some(list), "\n  ");
        let dd = tree.element(list, "dd");
        tree.text(Some(dd), value);
    }

    #[test]
    fn test_extract_full_record() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let h1 = tree.element(root, "h1");
        tree.text(Some(h1), "  ООО «Ромашка»  ");
        let list = tree.element(root, "dl");
        labelled_row(&mut tree, list, "ИНН", " 301234567 ");
        labelled_row(&mut tree, list, " Статус ", "Действующий");
        labelled_row(&mut tree, list, "Дата регистрации", "01.02.2010");
        labelled_row(&mut tree, list, "Адрес", "г. Ташкент");
        labelled_row(&mut tree, list, "Руководитель", "Иванов И. И.");
        labelled_row(&mut tree, list, "Уставный фонд", "10 000 000 UZS");

        let record = extract_record(&tree);

        assert_eq!(record.name.as_deref(), Some("ООО «Ромашка»"));
        assert_eq!(record.tax_id.as_deref(), Some("301234567"));
        assert_eq!(record.status.as_deref(), Some("Действующий"));
        assert_eq!(record.registration_date.as_deref(), Some("01.02.2010"));
        assert_eq!(record.address.as_deref(), Some("г. Ташкент"));
        assert_eq!(record.director_name.as_deref(), Some("Иванов И. И."));
        assert_eq!(record.charter_capital.as_deref(), Some("10 000 000 UZS"));
    }

    #[test]
    fn test_missing_labels_are_absent() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let p = tree.element(root, "p");
        tree.text(Some(p), "Ничего не найдено");

        let record = extract_record(&tree);

        assert!(record.is_empty());
    }

    #[test]
    fn test_label_without_sibling_is_absent() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let div = tree.element(root, "div");
        let span = tree.element(div, "span");
        tree.text(Some(span), "ИНН");
        tree.text(Some(div), "301234567");

        assert_eq!(label_value(&tree, TAX_ID_LABEL), None);
    }

    #[test]
    fn test_label_without_parent_is_absent() {
        let mut tree = FakeTree::default();
        tree.text(None, "ИНН");

        assert_eq!(label_value(&tree, TAX_ID_LABEL), None);
    }

    #[test]
    fn test_first_matching_label_wins() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let first = tree.element(root, "dl");
        labelled_row(&mut tree, first, "Адрес", "первый");
        let second = tree.element(root, "dl");
        labelled_row(&mut tree, second, "Адрес", "второй");

        assert_eq!(label_value(&tree, ADDRESS_LABEL).as_deref(), Some("первый"));
    }

    #[test]
    fn test_label_must_match_exactly() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let list = tree.element(root, "dl");
        labelled_row(&mut tree, list, "Юридический адрес", "г. Самарканд");

        assert_eq!(label_value(&tree, ADDRESS_LABEL), None);
    }

    #[test]
    fn test_charter_capital_label_priority() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let list = tree.element(root, "dl");
        labelled_row(&mut tree, list, "Уставной капитал", "третий");
        labelled_row(&mut tree, list, "Уставный фонд", "второй");

        let record = extract_record(&tree);
        assert_eq!(record.charter_capital.as_deref(), Some("второй"));
    }

    #[test]
    fn test_charter_capital_falls_through_unresolved_spelling() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let list = tree.element(root, "dl");
        labelled_row(&mut tree, list, "Уставной капитал", "500 000 UZS");
        // last child of the document: no value element after it
        let orphan = tree.element(root, "p");
        tree.text(Some(orphan), "Уставной фонд");

        let record = extract_record(&tree);
        assert_eq!(record.charter_capital.as_deref(), Some("500 000 UZS"));
    }

    #[test]
    fn test_blank_value_is_absent() {
        let mut tree = FakeTree::default();
        let root = tree.add(None, Some("html"), None);
        let list = tree.element(root, "dl");
        labelled_row(&mut tree, list, "Статус", "   ");

        assert_eq!(label_value(&tree, STATUS_LABEL), None);
    }
}
