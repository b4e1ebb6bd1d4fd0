use crate::catalog::{gallery_images, ListingRecord};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Detail view for one listing: full gallery, full description, the complete
/// highlight list, and the broker contact card.
pub fn detail_page(record: &ListingRecord) -> Markup {
    let images = gallery_images(record);
    let fallback = record.category().fallback_image();
    let swap = format!("this.onerror=null;this.src='{fallback}'");

    desktop_layout(
        &record.title,
        "/business-for-sale",
        html! {
            div class="breadcrumb" {
                a href="/business-for-sale" { "← 返回列表" }
            }

            div class="detail-layout" {
                div class="detail-main" {
                    div class="gallery" {
                        @if images.is_empty() {
                            div class="gallery-placeholder" {
                                img src=(fallback) alt=(record.title);
                                span { "暂无图片" }
                            }
                        } @else {
                            @for (index, image) in images.iter().enumerate() {
                                img
                                    src=(image)
                                    alt=(format!("{} - 图 {}", record.title, index + 1))
                                    onerror=(swap);
                            }
                        }
                    }

                    section {
                        h2 { "项目详情" }
                        p { (record.description) }
                    }

                    @if !record.highlights.is_empty() {
                        section {
                            h2 { "核心亮点" }
                            ul class="highlight-list" {
                                @for highlight in &record.highlights {
                                    li { (highlight) }
                                }
                            }
                        }
                    }
                }

                aside class="detail-sidebar" {
                    div class="summary-card" {
                        span class="badge" { (record.category) }
                        h1 { (record.title) }
                        p class="card-location" { (record.location) }
                        div class="price-block" {
                            span class="price-label" { "售价" }
                            span class="price" { (record.price) }
                        }
                        span class="listing-id" { "ID: " (record.listing_id) }
                    }

                    div class="contact-card" {
                        h3 { "对该项目感兴趣？" }
                        p { "立即联系 Steven 获取详细资料" }
                        p class="agent" { "Steven · 资深商业地产经纪人 · DRE# 01234567" }
                        a class="btn btn-primary" href="/contact" { "(626) 123-4567" }
                        a class="btn btn-outline" href="/contact" { "发送邮件咨询" }
                    }
                }
            }
        },
    )
}

/// Rendered when the requested id is not in the loaded catalog. Served with
/// a 404 but styled as a normal page, not an error screen.
pub fn missing_listing_page() -> Markup {
    desktop_layout(
        "未找到该房源",
        "/business-for-sale",
        html! {
            div class="container center" {
                h1 { "未找到该房源" }
                p { "该房源可能已下架或链接有误。" }
                a class="btn" href="/business-for-sale" { "返回列表" }
            }
        },
    )
}
