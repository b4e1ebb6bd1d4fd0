use maud::{html, Markup};

/// Shown in place of the grid when the catalog document could not be loaded.
/// The reload link re-enters the load for this page view; there is no
/// automatic retry.
pub fn catalog_error_panel(retry_href: &str) -> Markup {
    html! {
        div class="catalog-error" {
            h3 { "房源加载失败" }
            p { "请稍后重试，或点击下方按钮重新加载。" }
            a class="btn" href=(retry_href) { "重新加载" }
        }
    }
}

/// Shown when the filters matched nothing.
pub fn empty_state(clear_href: &str) -> Markup {
    html! {
        div class="empty-state" {
            h3 { "未找到相关房源" }
            p { "请尝试调整筛选条件或搜索关键词。" }
            a class="btn" href=(clear_href) { "清除所有筛选" }
        }
    }
}
