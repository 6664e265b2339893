/// Утилиты для списков: поиск по подстроке и поле поиска
use leptos::prelude::*;

/// Rows that can be matched by the search box
pub trait Searchable {
    /// Text fields the filter looks at
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Case-insensitive substring filter; a blank filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Limpiar"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str, &'static str);

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = vec![Item("Ana Pérez", "30111222"), Item("Luis Gómez", "28999000")];
        assert_eq!(filter_list(&items, "PÉR"), vec![items[0].clone()]);
        assert_eq!(filter_list(&items, "999"), vec![items[1].clone()]);
        assert_eq!(filter_list(&items, "  "), items);
        assert!(filter_list(&items, "zzz").is_empty());
    }
}
