//! Accordion groups and items

/// One header + panel pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem<E> {
    pub group_index: usize,
    pub item_index: usize,
    pub header: E,
    pub panel: E,
    /// First label-marked element inside the panel
    pub label: Option<E>,
    pub(crate) is_open: bool,
}

impl<E> AccordionItem<E> {
    pub fn new(group_index: usize, item_index: usize, header: E, panel: E, label: Option<E>) -> Self {
        Self {
            group_index,
            item_index,
            header,
            panel,
            label,
            is_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// `tab{group}-{item}`
    pub fn header_id(&self) -> String {
        format!("tab{}-{}", self.group_index, self.item_index)
    }

    /// `panel{group}-{item}`
    pub fn panel_id(&self) -> String {
        format!("panel{}-{}", self.group_index, self.item_index)
    }
}

/// One accordion container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionGroup<E> {
    pub group_index: usize,
    pub root: E,
    pub items: Vec<AccordionItem<E>>,
}

impl<E: Copy + Eq> AccordionGroup<E> {
    /// Header elements in order
    pub fn headers(&self) -> Vec<E> {
        self.items.iter().map(|i| i.header).collect()
    }

    /// Position of `header` among this group's headers
    pub fn item_for_header(&self, header: E) -> Option<usize> {
        self.items.iter().position(|i| i.header == header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        let item = AccordionItem::new(2, 5, 'h', 'p', None);
        assert_eq!(item.header_id(), "tab2-5");
        assert_eq!(item.panel_id(), "panel2-5");
        assert!(!item.is_open());
    }

    #[test]
    fn test_item_for_header() {
        let group = AccordionGroup {
            group_index: 0,
            root: 'r',
            items: vec![
                AccordionItem::new(0, 0, 'a', 'b', None),
                AccordionItem::new(0, 1, 'c', 'd', None),
            ],
        };
        assert_eq!(group.headers(), vec!['a', 'c']);
        assert_eq!(group.item_for_header('c'), Some(1));
        assert_eq!(group.item_for_header('b'), None);
    }
}
