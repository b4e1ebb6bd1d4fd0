use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn not_found_page() -> Markup {
    desktop_layout(
        "页面不存在",
        "",
        html! {
            div class="container center" {
                h1 { "404" }
                p { "您访问的页面不存在或已被移动。" }
                a class="btn" href="/" { "返回首页" }
            }
        },
    )
}
