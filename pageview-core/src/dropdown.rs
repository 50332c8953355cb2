//! Dropdown: mô hình dữ liệu cho navbar và quyết định đóng/mở theo click.

use serde::{Deserialize, Serialize};

use crate::daterange::{date_range_options, DateRange, DateRangeOption};

/// Một lựa chọn trong dropdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropdownOption {
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub value: String,
}

/// Dữ liệu để render một dropdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dropdown {
    pub selected: DropdownOption,
    pub options: Vec<DropdownOption>,
    #[serde(default)]
    pub input_name: String,
}

/// Project tối thiểu để dựng dropdown chọn project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectEntry {
    pub project_id: String,
    pub name: String,
}

/// Dựng dropdown chọn project cho navbar.
///
/// Link của mỗi lựa chọn giữ nguyên khoảng thời gian đang xem. Nếu không tìm
/// thấy `selected_id` thì chọn project đầu tiên.
pub fn project_dropdown(
    projects: &[ProjectEntry],
    selected_id: Option<&str>,
    range: DateRange,
) -> Dropdown {
    let options: Vec<DropdownOption> = projects
        .iter()
        .map(|project| DropdownOption {
            name: project.name.clone(),
            link: format!(
                "/?project_id={}&daterange={}",
                project.project_id,
                range.as_str()
            ),
            value: String::new(),
        })
        .collect();

    let selected = selected_id
        .and_then(|id| {
            projects
                .iter()
                .position(|project| project.project_id == id)
        })
        .or((!options.is_empty()).then_some(0))
        .map(|index| options[index].clone())
        .unwrap_or_default();

    Dropdown {
        selected,
        options,
        input_name: String::new(),
    }
}

/// Dữ liệu navbar: dropdown project và dãy lựa chọn khoảng thời gian.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navbar {
    pub projects: Dropdown,
    pub date_ranges: Vec<DateRangeOption>,
}

/// Dựng navbar cho project đang xem. Link khoảng thời gian trỏ về project đã
/// được chọn trong dropdown, kể cả khi `selected_id` rơi về project đầu tiên.
pub fn navbar(projects: &[ProjectEntry], selected_id: Option<&str>, range: DateRange) -> Navbar {
    let project_id = selected_id
        .filter(|id| projects.iter().any(|project| project.project_id == *id))
        .or_else(|| projects.first().map(|project| project.project_id.as_str()))
        .unwrap_or_default();

    Navbar {
        projects: project_dropdown(projects, selected_id, range),
        date_ranges: date_range_options(project_id, range),
    }
}

/// Vị trí của click so với các dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Nút kích hoạt của dropdown thứ `i`.
    Trigger(usize),
    /// Bên trong một dropdown container nhưng không phải nút kích hoạt.
    InsideContainer,
    /// Mọi nơi khác trong document.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownAction {
    /// Đảo trạng thái dropdown `i` và chặn lan truyền sự kiện.
    Toggle(usize),
    Keep,
    CloseAll,
}

pub fn resolve_click(target: ClickTarget) -> DropdownAction {
    match target {
        ClickTarget::Trigger(index) => DropdownAction::Toggle(index),
        ClickTarget::InsideContainer => DropdownAction::Keep,
        ClickTarget::Outside => DropdownAction::CloseAll,
    }
}

/// Trạng thái đóng/mở của các dropdown trên trang, không gắn với DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownSet {
    open: Vec<bool>,
}

impl DropdownSet {
    pub fn new(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Chỉ số các dropdown đang mở.
    pub fn open_indices(&self) -> Vec<usize> {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(index, open)| open.then_some(index))
            .collect()
    }

    /// Áp dụng một click; chỉ số ngoài phạm vi bị bỏ qua.
    pub fn handle_click(&mut self, target: ClickTarget) -> DropdownAction {
        let action = resolve_click(target);
        match action {
            DropdownAction::Toggle(index) => {
                if let Some(open) = self.open.get_mut(index) {
                    *open = !*open;
                }
            }
            DropdownAction::Keep => {}
            DropdownAction::CloseAll => self.open.iter_mut().for_each(|open| *open = false),
        }
        action
    }
}
