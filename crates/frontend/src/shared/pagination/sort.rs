/// Sort column and direction of a paginated list
///
/// Both fields are `None` when the list is unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub desc: Option<bool>,
}

impl SortState {
    pub fn new(column: Option<&str>, desc: Option<bool>) -> Self {
        Self {
            column: column.map(str::to_string),
            desc,
        }
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }

    /// Direction of `column`, `None` if the list is not sorted by it
    pub fn direction_of(&self, column: &str) -> Option<bool> {
        match &self.column {
            Some(current) if current == column => Some(self.desc.unwrap_or(false)),
            _ => None,
        }
    }

    /// Bare direction toggle: drops the column, keeps only the direction
    pub fn set_direction(&mut self, desc: bool) {
        self.column = None;
        self.desc = Some(desc);
    }

    /// Click on a sortable column.
    ///
    /// - `None` restores `default`
    /// - with `modifier` (shift) an active sort is cleared
    /// - the current column flips its direction
    /// - another column becomes the sort column, ascending unless a direction is set
    pub fn toggle_column(&mut self, column: Option<&str>, modifier: bool, default: &SortState) {
        let Some(column) = column else {
            *self = default.clone();
            return;
        };
        if modifier && self.is_active() {
            *self = SortState::default();
        } else if self.column.as_deref() == Some(column) {
            self.desc = Some(!self.desc.unwrap_or(false));
        } else {
            self.column = Some(column.to_string());
            self.desc.get_or_insert(false);
        }
    }

    /// Takes over whatever the server reported, field by field
    pub fn adopt(&mut self, column: Option<String>, desc: Option<bool>) {
        if column.is_some() {
            self.column = column;
        }
        if desc.is_some() {
            self.desc = desc;
        }
    }
}
