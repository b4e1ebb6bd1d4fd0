use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn about_page() -> Markup {
    desktop_layout(
        "关于我们",
        "/about",
        html! {
            div class="page-header" {
                h1 { "关于我们" }
                p { "专业、透明、结果导向的商业地产服务。" }
            }
            div class="container prose" {
                section {
                    h2 { "Steven · 资深商业地产经纪人" }
                    p {
                        "十余年深耕洛杉矶及内陆帝国商业地产市场，专注生意转让、"
                        "工业仓库买卖租赁与办公商铺选址。累计协助数百位客户完成交易，"
                        "熟悉华人社区的经营业态与交易习惯。"
                    }
                }
                section {
                    h2 { "我们的服务" }
                    ul {
                        li { "生意转让：估值、挂牌、尽职调查与过户交接" }
                        li { "工业/仓库：买卖、租赁与投资回报分析" }
                        li { "办公/商铺：商圈分析与租约谈判" }
                    }
                }
                section {
                    h2 { "为什么选择我们" }
                    p {
                        "依托 RE/MAX 全球品牌网络与本地一线成交经验，"
                        "我们坚持用数据说话，把每一单生意当作自己的生意来做。"
                    }
                }
            }
        },
    )
}
