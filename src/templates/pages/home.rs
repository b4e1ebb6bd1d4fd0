// templates/pages/home.rs

use crate::catalog::ListingCard;
use crate::templates::{catalog_error_panel, desktop_layout, listing_card};
use maud::{html, Markup};

/// `featured` is None when the featured document failed to load; the strip
/// then shows the reload panel instead of cards.
pub fn home_page(featured: Option<&[ListingCard]>) -> Markup {
    desktop_layout(
        "首页",
        "/",
        html! {
            section class="hero" {
                div class="hero-inner" {
                    span class="hero-kicker" { "RE/MAX GALAXY 顶级商业地产团队" }
                    h1 { "洛杉矶商业地产" br; span { "专业投资顾问" } }
                    p {
                        "深耕南加州市场，为您提供生意转让、仓库买卖与租赁的一站式专业服务。"
                    }
                    div class="hero-actions" {
                        a class="btn btn-primary" href="/business-for-sale" { "浏览精选房源" }
                        a class="btn btn-outline" href="/contact" { "预约免费咨询" }
                    }
                }
            }

            section class="services" {
                h2 { "全方位商业地产服务" }
                p class="section-intro" {
                    "依托 RE/MAX 全球品牌资源，结合本地深耕经验，为您提供最精准的商业地产解决方案。"
                }
                div class="service-grid" {
                    (service_tile("/business-for-sale", "生意转让",
                        "精选优质餐饮、零售、服务类生意资源。从选址评估到过户交接，全程协助您完成生意买卖。"))
                    (service_tile("/industrial-warehouse", "工业/仓库",
                        "专注于洛杉矶东区及内陆帝国的工业地产。提供仓库买卖、租赁、投资回报分析等专业服务。"))
                    (service_tile("/office-retail", "办公/商铺",
                        "覆盖核心商圈的办公楼与零售商铺资源。协助您寻找最佳商业选址，助力企业发展。"))
                }
            }

            section class="featured" {
                h2 { "精选房源" }
                @match featured {
                    Some(cards) => {
                        div class="listing-grid" {
                            @for card in cards {
                                (listing_card(card))
                            }
                        }
                    }
                    None => {
                        (catalog_error_panel("/"))
                    }
                }
            }
        },
    )
}

fn service_tile(href: &str, title: &str, blurb: &str) -> Markup {
    html! {
        a class="service-tile" href=(href) {
            h3 { (title) }
            p { (blurb) }
            span class="tile-cta" { "查看房源 →" }
        }
    }
}
