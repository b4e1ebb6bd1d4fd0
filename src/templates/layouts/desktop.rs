use maud::{html, Markup, DOCTYPE};

const NAV_LINKS: [(&str, &str); 7] = [
    ("/business-for-sale", "生意转让"),
    ("/industrial-warehouse", "工业/仓库"),
    ("/office-retail", "办公/商铺"),
    ("/success-stories", "成功案例"),
    ("/market-insights", "市场洞察"),
    ("/about", "关于我们"),
    ("/contact", "联系我们"),
];

pub fn desktop_layout(title: &str, active: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Galaxy 商业地产" }
                link rel="icon" href="/static/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#1d3a6e"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M3 21l18 0" {}
                            path d="M5 21v-14l8 -4v18" {}
                            path d="M19 21v-10l-6 -4" {}
                        }
                        span { "Galaxy 商业地产" }
                    }
                    nav {
                        ul {
                            @for (href, label) in NAV_LINKS {
                                li {
                                    a href=(href) class=[(active == href).then_some("active")] {
                                        (label)
                                    }
                                }
                            }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "Galaxy 商业地产 · 洛杉矶商业地产专业团队" }
                    p class="fine-print" { "DRE# 01234567 · (626) 123-4567" }
                }
            }
        }
    }
}
