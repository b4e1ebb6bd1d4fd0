use crate::templates::desktop_layout;
use chrono::NaiveDate;
use maud::{html, Markup};

struct InsightPost {
    title: &'static str,
    category: &'static str,
    date: NaiveDate,
    read_minutes: u32,
    excerpt: &'static str,
    image: &'static str,
}

// Editorial content, maintained in code like the rest of the static copy.
fn posts() -> Vec<InsightPost> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    vec![
        InsightPost {
            title: "2026年洛杉矶商业地产市场展望：机遇与挑战并存",
            category: "市场趋势",
            date: date(2026, 1, 15),
            read_minutes: 5,
            excerpt: "随着美联储降息预期的升温，洛杉矶商业地产市场正在迎来新的转机。\
                本文深度分析了零售、办公及工业地产的三大趋势。",
            image: "/images/home-banner.svg",
        },
        InsightPost {
            title: "如何在加州购买生意？新手必读的尽职调查清单",
            category: "买家指南",
            date: date(2025, 12, 20),
            read_minutes: 8,
            excerpt: "买生意不仅仅是看财务报表。从租约审核到设备检查，\
                这 10 个关键点如果你忽略了，可能会带来巨大的隐患。",
            image: "/images/business-cover.svg",
        },
        InsightPost {
            title: "SBA 504 贷款详解：中小企业如何低首付买仓库",
            category: "融资贷款",
            date: date(2025, 11, 10),
            read_minutes: 6,
            excerpt: "不想再给房东交租金？SBA 504 贷款允许中小企业主以低至 10% \
                的首付购买自用商业房产。看看你是否符合条件。",
            image: "/images/industrial-cover.svg",
        },
        InsightPost {
            title: "餐厅选址避坑指南：除了人流，你还应该看什么？",
            category: "选址策略",
            date: date(2025, 10, 5),
            read_minutes: 4,
            excerpt: "排烟管道、隔油池、停车位配比...这些看似不起眼的工程细节，\
                往往决定了一家餐厅的生死存亡。",
            image: "/images/business-cover.svg",
        },
        InsightPost {
            title: "NNN Lease (三净租赁) 投资入门：躺着收租真的可行吗？",
            category: "投资理财",
            date: date(2025, 9, 18),
            read_minutes: 7,
            excerpt: "对于寻求稳定现金流的投资人来说，NNN Lease 是一个极佳的选择。\
                但如何筛选靠谱的租客？如何规避空置风险？",
            image: "/images/office-cover.svg",
        },
        InsightPost {
            title: "洛杉矶东区 vs 内陆帝国：工业地产投资回报率大比拼",
            category: "区域分析",
            date: date(2025, 8, 22),
            read_minutes: 5,
            excerpt: "同样的预算，在 City of Industry 和 Ontario 能买到什么样的仓库？\
                我们用真实成交数据对比两大区域的回报率。",
            image: "/images/industrial-cover.svg",
        },
    ]
}

pub fn insights_page() -> Markup {
    desktop_layout(
        "市场洞察",
        "/market-insights",
        html! {
            div class="page-header" {
                h1 { "市场洞察" }
                p { "商业地产市场趋势、买卖指南与投资分析。" }
            }
            div class="container" {
                div class="post-grid" {
                    @for post in posts() {
                        article class="post-card" {
                            img src=(post.image) alt=(post.title) loading="lazy";
                            div class="post-body" {
                                span class="badge" { (post.category) }
                                h3 { (post.title) }
                                p { (post.excerpt) }
                                p class="post-meta" {
                                    (post.date.format("%Y-%m-%d"))
                                    " · "
                                    (post.read_minutes) " 分钟阅读"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
