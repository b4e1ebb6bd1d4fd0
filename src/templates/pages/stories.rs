use crate::templates::desktop_layout;
use maud::{html, Markup};

struct SuccessStory {
    title: &'static str,
    category: &'static str,
    location: &'static str,
    image: &'static str,
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

fn stories() -> Vec<SuccessStory> {
    vec![
        SuccessStory {
            title: "帮助首次创业者成功接手罗兰岗知名奶茶店",
            category: "生意转让",
            location: "Rowland Heights",
            image: "/images/business-cover.svg",
            quote: "Steven 不仅帮我谈下了理想的价格，还手把手教我如何办理各种执照，\
                对于我这个新手来说太重要了！",
            author: "王先生 (Mr. Wang)",
            role: "奶茶店主",
        },
        SuccessStory {
            title: "协助物流公司在 Ontario 扩租 50,000 呎仓库",
            category: "仓库租赁",
            location: "Ontario",
            image: "/images/industrial-cover.svg",
            quote: "我们的业务增长很快，急需大仓库。Steven 团队在短短两周内就帮我们\
                找到了合适的场地，效率惊人。",
            author: "李总 (CEO)",
            role: "跨境物流公司",
        },
        SuccessStory {
            title: "为牙科诊所在 Irvine 核心区寻得完美办公点",
            category: "办公租赁",
            location: "Irvine",
            image: "/images/office-cover.svg",
            quote: "医疗诊所对选址要求很苛刻。Steven 对 Zoning 和工程条件的专业知识，\
                帮我们避开了许多潜在的大坑。",
            author: "Dr. Zhang",
            role: "牙科诊所创始人",
        },
    ]
}

pub fn stories_page() -> Markup {
    desktop_layout(
        "成功案例",
        "/success-stories",
        html! {
            div class="page-header center" {
                h1 { "真实成交案例" }
                p { "每一个案例背后，都是一份信任的托付。我们用专业和结果，回报每一位客户的信任。" }
            }
            div class="container" {
                @for story in stories() {
                    article class="story" {
                        img src=(story.image) alt=(story.title) loading="lazy";
                        div class="story-body" {
                            span class="badge" { (story.category) }
                            h3 { (story.title) }
                            p class="card-location" { (story.location) }
                            blockquote { (story.quote) }
                            p class="story-author" { (story.author) " · " (story.role) }
                        }
                    }
                }
            }
        },
    )
}
