use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page() -> Markup {
    desktop_layout(
        "联系我们",
        "/contact",
        html! {
            div class="page-header" {
                h1 { "联系我们" }
                p { "留下您的需求，我们会在一个工作日内回复。" }
            }
            div class="container" {
                form class="contact-form" method="post" action="/contact" {
                    label for="name" { "姓名 *" }
                    input id="name" name="name" placeholder="您的称呼" required;

                    label for="phone" { "电话 *" }
                    input id="phone" name="phone" placeholder="联系电话" required;

                    label for="email" { "电子邮箱" }
                    input id="email" name="email" type="email" placeholder="example@email.com";

                    label for="message" { "详细需求" }
                    textarea id="message" name="message" rows="6"
                        placeholder="想了解的房源、预算范围、期望区域..." {}

                    button type="submit" class="btn btn-primary" { "发送消息" }
                }
            }
        },
    )
}

/// Confirmation after a form post. Nothing is stored or forwarded; the
/// submission is acknowledged and logged only.
pub fn contact_received_page(name: &str) -> Markup {
    desktop_layout(
        "消息已发送",
        "/contact",
        html! {
            div class="container center" {
                h1 { "消息已发送！" }
                @if name.is_empty() {
                    p { "我们已收到您的咨询，会尽快与您联系。" }
                } @else {
                    p { (name) "，我们已收到您的咨询，会尽快与您联系。" }
                }
                a class="btn" href="/" { "返回首页" }
            }
        },
    )
}
