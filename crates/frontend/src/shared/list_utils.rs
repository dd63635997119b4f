//! Утилиты для заголовков сортируемых списков

/// Иконка сортировки для колонки; `direction` - направление, если список отсортирован по ней
pub fn get_sort_icon(direction: Option<bool>) -> &'static str {
    match direction {
        Some(false) => "chevron-up",
        Some(true) => "chevron-down",
        None => "arrow-up-down",
    }
}

/// CSS класс заголовка колонки
pub fn get_sort_class(direction: Option<bool>) -> &'static str {
    match direction {
        Some(false) => "sortable sorted sorted--asc",
        Some(true) => "sortable sorted sorted--desc",
        None => "sortable",
    }
}

/// Подсказка к заголовку
pub fn get_sort_title(direction: Option<bool>) -> &'static str {
    match direction {
        Some(false) => "По возрастанию (Shift+клик - сбросить)",
        Some(true) => "По убыванию (Shift+клик - сбросить)",
        None => "Сортировать",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_icon_follows_direction() {
        assert_eq!(get_sort_icon(Some(false)), "chevron-up");
        assert_eq!(get_sort_icon(Some(true)), "chevron-down");
        assert_eq!(get_sort_icon(None), "arrow-up-down");
    }

    #[test]
    fn test_sort_class_marks_sorted_column() {
        assert!(get_sort_class(Some(true)).contains("sorted--desc"));
        assert!(!get_sort_class(None).contains("sorted"));
    }
}
