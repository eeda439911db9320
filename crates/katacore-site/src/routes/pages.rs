//! Marketing pages.
//!
//! `/` is the company story and is prerendered at startup: a request with no
//! query and no session is answered from memory. Every other page, and `/`
//! with accordion state in its query, is rendered per request.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use katacore_core::accordion::{Accordion, AccordionItem};
use katacore_core::manifest::RenderMode;
use katacore_core::products::placeholder_products;
use katacore_core::session::Session;

use crate::components;
use crate::layout::{self, Chrome, Page};
use crate::routes::{CurrentSession, PageQuery, page_query, rendered};
use crate::state::AppState;

/// Build the marketing pages router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(about))
        .route("/nlp", get(nlp))
        .route("/time-line-therapy", get(time_line_therapy))
        .route("/footer", get(footer_showcase))
        .route("/sanpham", get(products))
}

/// Render a route with no query and no session, for the prerender cache.
#[must_use]
pub fn render_static(chrome: &Chrome<'_>, route: &str) -> Option<String> {
    match route {
        "/" => Some(render_about(chrome, &PageQuery::new(), None)),
        _ => None,
    }
}

async fn about(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let query = page_query(query);
    if query.is_empty() && session.is_none() {
        if let Some(html) = state.prerendered("/") {
            return rendered(RenderMode::Prerender, html.to_owned());
        }
    }
    rendered(
        RenderMode::Server,
        render_about(&state.chrome(), &query, session.as_ref()),
    )
}

async fn nlp(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let mut content = String::from(NLP_INTRO);
    content.push_str("<section class=\"tools\"><h2>NLP - Hộp công cụ cuộc sống đa năng</h2><p>NLP là một tập hợp gồm nhiều công cụ và kỹ thuật hữu ích trang bị cho bạn khả năng</p><div class=\"grid grid-4\">");
    for (title, description, image) in NLP_TOOLS {
        content.push_str(&components::tool_card(title, description, image));
    }
    content.push_str("</div></section>");

    let page = Page::new("/nlp").titled("NLP").with_session(session.as_ref());
    rendered(
        RenderMode::Server,
        layout::site_page(&state.chrome(), &page, &content),
    )
}

async fn time_line_therapy(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let query = page_query(query);
    let path = "/time-line-therapy";

    let mut content = String::from(TLT_INTRO);
    content.push_str("<section class=\"split\"><div><h1>Cơ chế hoạt động chính của Time Line Therapy®</h1>");
    content.push_str(&components::accordion(&TLT_MECHANISM, path, &query));
    content.push_str("</div><img src=\"https://placehold.co/500x350/cccccc/333333\" alt=\"InnerBright team and students\" width=\"500\" height=\"350\"/></section>");

    content.push_str("<section class=\"features\"><h1>Giá trị nổi bật của Trị liệu dòng thời gian</h1><div class=\"grid grid-2\">");
    for (icon, title, description) in TLT_FEATURES {
        content.push_str(&components::feature_card(icon, title, description));
    }
    content.push_str("</div></section>");
    content.push_str(TLT_TECHNIQUES);

    let page = Page::new(path)
        .titled("Time Line Therapy®")
        .with_session(session.as_ref());
    rendered(
        RenderMode::Server,
        layout::site_page(&state.chrome(), &page, &content),
    )
}

async fn footer_showcase(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let page = Page::new("/footer")
        .titled("Footer - Your E-commerce")
        .with_session(session.as_ref());
    rendered(
        RenderMode::Server,
        layout::site_page(&state.chrome(), &page, FOOTER_SHOWCASE),
    )
}

async fn products(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let mut content = String::from("<section class=\"products\"><h1>Our Products</h1>");
    content.push_str(&components::product_list(&placeholder_products()));
    content.push_str("</section>");

    let page = Page::new("/sanpham")
        .titled("Sản phẩm")
        .with_session(session.as_ref());
    rendered(
        RenderMode::Server,
        layout::site_page(&state.chrome(), &page, &content),
    )
}

fn render_about(chrome: &Chrome<'_>, query: &PageQuery, session: Option<&Session>) -> String {
    let mut content = String::from(ABOUT_INTRO);
    content.push_str("<section class=\"foundations\"><div class=\"section-title\"><h1>5 Nền Tảng</h1><p>Tạo Nên Sự Khác Biệt Trong Mỗi Khóa Học tại InnerBright</p></div><div class=\"split\">");
    content.push_str(&components::accordion(&FIVE_FOUNDATIONS, "/", query));
    content.push_str("<img src=\"https://placehold.co/500x350/cccccc/333333\" alt=\"InnerBright team and students\" width=\"500\" height=\"350\"/></div></section>");
    content.push_str(ABOUT_TEAM);

    let page = Page::new("/").with_session(session);
    layout::site_page(chrome, &page, &content)
}

// ── Accordions ───────────────────────────────────────────────────────

/// "5 Nền Tảng" on the company story page.
pub const FIVE_FOUNDATIONS: Accordion = Accordion {
    id: "five-foundations",
    items: &[
        AccordionItem {
            title: "Khai Phá Tiềm Năng Não Bộ",
            body: "<p>Nội dung chi tiết về việc khai phá tiềm năng não bộ.</p>",
        },
        AccordionItem {
            title: "Làm Chủ Từng Bước Thực Hành",
            body: "<p>Nội dung chi tiết về các bước thực hành hiệu quả.</p>",
        },
        AccordionItem {
            title: "Học Qua Trải Nghiệm Sâu Sắc",
            body: "<p>Nội dung chi tiết về phương pháp học qua trải nghiệm.</p>",
        },
        AccordionItem {
            title: "Kiến Tạo Thói Quen Thay Đổi Bền Vững",
            body: "<p>Nội dung chi tiết về việc hình thành thói quen tích cực.</p>",
        },
        AccordionItem {
            title: "Đồng Hành Trên Hành Trình Chuyển Hóa",
            body: "<p>Nội dung chi tiết về sự hỗ trợ đồng hành trong quá trình chuyển hóa.</p>",
        },
    ],
};

/// Mechanism list on the Time Line Therapy page.
pub const TLT_MECHANISM: Accordion = Accordion {
    id: "tlt-mechanism",
    items: &[
        AccordionItem {
            title: "Xác định Dòng Thời Gian",
            body: "<p>Xác định Dòng Thời Gian</p>",
        },
        AccordionItem {
            title: "Làm Chủ Từng Bước Thực Hành",
            body: "<p>Làm Chủ Từng Bước Thực Hành</p>",
        },
        AccordionItem {
            title: "Học Qua Trải Nghiệm Sâu Sắc",
            body: "<p>Học Qua Trải Nghiệm Sâu Sắc</p>",
        },
        AccordionItem {
            title: "Kiến Tạo Thói Quen Thay Đổi Bền Vững",
            body: "<p>Kiến Tạo Thói Quen Thay Đổi Bền Vững</p>",
        },
        AccordionItem {
            title: "Đồng Hành Trên Hành Trình Chuyển Hóa",
            body: "<p>Đồng Hành Trên Hành Trình Chuyển Hóa</p>",
        },
    ],
};

// ── Content ──────────────────────────────────────────────────────────

const NLP_TOOLS: &[(&str, &str, &str)] = &[
    (
        "Hiểu rõ bản thân",
        "Hiểu rõ hơn về giá trị, mục tiêu, niềm tin và khả năng của bản thân để phát triển tiềm năng cá nhân.",
        "https://placehold.co/300x200/F0F0F0/333333?text=Self-Understanding",
    ),
    (
        "Hiểu rõ người khác",
        "Nâng cao kỹ năng giao tiếp, tạo ra mối quan hệ tốt đẹp và ảnh hưởng tích cực đến những người xung quanh.",
        "https://placehold.co/300x200/F0F0F0/333333?text=Others-Understanding",
    ),
    (
        "Làm chủ cuộc sống",
        "Phát triển khả năng tự quản lý cảm xúc, giải quyết vấn đề và đạt được mục tiêu cuộc sống.",
        "https://placehold.co/300x200/F0F0F0/333333?text=Life-Mastery",
    ),
    (
        "Khai vấn - Coaching",
        "Cung cấp các công cụ và kỹ thuật để hỗ trợ người khác đạt được mục tiêu và giải quyết vấn đề.",
        "https://placehold.co/300x200/F0F0F0/333333?text=Coaching",
    ),
];

const TLT_FEATURES: &[(&str, &str, &str)] = &[
    (
        "⏱",
        "Hiệu quả nhanh chóng",
        "Hiệu quả nhanh chóng. Nhiều người trải nghiệm sự thay đổi đáng kể chỉ sau một vài buổi trị liệu.",
    ),
    (
        "⟵",
        "Tác động sâu sắc",
        "TLT làm việc trực tiếp với gốc rễ của vấn đề, mang lại sự chuyển hóa bền vững.",
    ),
    (
        "⚠",
        "Giải quyết các vấn đề tâm lý",
        "Hiệu quả trong giải tỏa cảm xúc tiêu cực, lo âu, trầm cảm, ám ảnh, rối loạn stress sau sang chấn, v.v.",
    ),
    (
        "☺",
        "Nâng cao lòng tự trọng",
        "Giúp bạn tin tưởng vào bản thân và khả năng của mình.",
    ),
    (
        "⇄",
        "Cải thiện các mối quan hệ",
        "Tăng cường khả năng giao tiếp và thấu hiểu người khác.",
    ),
    (
        "◎",
        "Đạt được mục tiêu",
        "Xác định mục tiêu và lập kế hoạch để đạt được chúng.",
    ),
    (
        "✦",
        "Tăng cường sức mạnh nội tại",
        "Giải phóng những rào cản giúp bạn kết nối với nguồn lực và tiềm năng bên trong.",
    ),
];

const ABOUT_INTRO: &str = r#"<section id="section1" class="hero">
<img src="https://placehold.co/800x300/b0e0e6/000000" alt="InnerBright Team"/>
<div class="hero-text"><h1>CÂU CHUYỆN VỀ InnerBright</h1>
<p>InnerBright Training &amp; Coaching được thành lập từ năm 2020 bởi nhà đào tạo Chloe Quý Châu</p></div>
</section>
<section class="aspirations">
<h2>MANG TRONG MÌNH KHÁT VỌNG</h2>
<div class="grid grid-3">
  <div class="card overlay-card"><img src="https://placehold.co/400x200/a0c4ff/ffffff" alt="Mission"/><div><h3>SỨ MỆNH</h3><p>Tạo dựng cuộc sống thịnh vượng hơn cho người người Việt Nam bằng việc khai phóng tiềm năng và giúp phát huy tối đa nội lực của mỗi cá nhân.</p></div></div>
  <div class="card overlay-card"><img src="https://placehold.co/400x200/a0c4ff/ffffff" alt="Vision"/><div><h3>TẦM NHÌN</h3><p>Trang bị cho mỗi người Việt Nam đủ sở hữu tư duy phát triển bản thân đúng đắn, hiệu quả và bền vững.</p></div></div>
  <div class="card overlay-card"><img src="https://placehold.co/400x200/a0c4ff/ffffff" alt="Values"/><div><h3>GIÁ TRỊ CỐT LÕI</h3><ul><li>Hệ thống</li><li>Hợp nhất</li><li>Tử tế</li></ul></div></div>
</div>
</section>
<section class="development">
<h2>PHÁT TRIỂN BẢN THÂN</h2>
<p class="lead">là sức mạnh để thay đổi thế giới</p>
<p>Thế giới của mỗi người chính là bề sinh trắc, nơi mỗi chúng ta sống và làm việc cùng các cộng đồng. Tại InnerBright, điều quan trọng không chỉ là được thành công cá nhân, mà còn là sử dụng sức mạnh này để tạo ra sự khác biệt và ảnh hưởng đến hệ sinh thái của riêng bạn. Bằng cách phát triển bản thân, chúng ta tự trở thành người cầm trịch và sẽ thay đổi cả thế giới.</p>
<p>Chúng tôi - những con người tại InnerBright rất tự hào và sẵn sàng đồng hành cùng bạn trên hành trình này để khai phóng tiềm năng và giúp phát huy tối đa nội lực của riêng Bạn</p>
</section>
<section class="certification">
<h2>HỆ THỐNG CHỨNG NHẬN</h2>
<div class="grid grid-2">
  <div><p>InnerBright Training &amp; Coaching tự hào là thành viên chính thức và uy tín của Hiệp Hội NLP Hoa Kỳ (ABNLP) trong hơn 5 năm liên tục. ABNLP với vai trò là tổ chức lớn nhất và lâu đời nhất về Lập Trình Ngôn Ngữ Tư Duy (NLP - Neuro Linguistic Programming) tại Hoa Kỳ, có chứng nhận sự chuyên nghiệp và chất lượng đào tạo của InnerBright.</p>
  <h3>HỌC VIỆN ĐÀO TẠO NLP</h3><img src="https://placehold.co/200x100/e0e0e0/333333" alt="ABNLP Logo"/><p>Institute of Neuro Linguistic Programming</p></div>
  <div><p>Đặc biệt, InnerBright là đơn vị tiên phong tại Việt Nam được Ban Cố Vấn (Board of Advisors) của Hiệp Hội ABNLP chứng thực bằng chương trình NLP Master Coach Quốc Tế. Điều này đảm bảo rằng không chỉ về kiến thức chuyên môn, mà còn về đạo đức nghề nghiệp, InnerBright mang đến chương trình đào tạo NLP Coaching chuẩn quốc tế tại Việt Nam.</p>
  <h3>HỌC VIỆN ĐÀO TẠO NLP COACHING</h3><img src="https://placehold.co/200x100/e0e0e0/333333" alt="NLP Coaching Logo"/></div>
</div>
</section>
<section class="why">
<h1>Vì sao InnerBright là lựa chọn khác biệt?</h1>
<div class="hero"><img src="https://placehold.co/800x300/b0e0e6/000000" alt="Laptop showing NLP concepts"/>
<div class="hero-text"><h2>NLP</h2><h3>Neuro Linguistic Programming</h3><p>Lập trình ngôn ngữ tư duy, không chỉ là một tập hợp các kỹ thuật, mà là một hành trình khám phá sức mạnh nội tại để tạo ra sự chuyển hóa sâu sắc. Để ứng dụng NLP hiệu quả, sự thấu hiểu cội nguồn và nguyên lý hoạt động là then chốt.</p></div></div>
<div class="split"><img src="https://placehold.co/300x300/cccccc/333333" alt="Woman speaking at InnerBright"/>
<div><h2>Tại InnerBright</h2><p>chúng tôi không chỉ trang bị cho bạn kiến thức NLP; chúng tôi dẫn dắt bạn thực sự thấu suốt bản chất của từng công cụ. Bạn sẽ hiểu tại sao chúng hoạt động, khi nào nên sử dụng và làm thế nào để tích hợp chúng một cách linh hoạt vào cuộc sống.</p></div></div>
<p>Với tâm huyết truyền tải tinh thần chính trực của NLP, InnerBright không đơn thuần mang đến một hệ thống bài bản. Chúng tôi kiến tạo một hành trình phát triển bản thân toàn diện, hấp nhất sức mạnh nội tại của bạn với sự trưởng thành ở cả bốn khía cạnh then chốt: trí tuệ lý trí (mental intelligence), trí tuệ cảm xúc (emotional intelligence), trí tuệ thể chất (physical intelligence) và trí tuệ tâm linh (spiritual intelligence).</p>
<p>Chúng tôi nuôi dưỡng những giá trị cốt lõi của bạn, tạo nên một hệ sinh thái nội tại vụng mạnh và bền vững, giúp bạn phát triển toàn diện và sống một cuộc đời trọn vẹn.</p>
</section>
"#;

const ABOUT_TEAM: &str = r#"<section class="team">
<h2>ĐỘI NGŨ CHUYÊN GIA</h2>
<div class="split"><img class="avatar" src="https://placehold.co/200x200/cccccc/333333" alt="Chloe Quý Châu"/>
<div><h3>Chloe Quý Châu</h3>
<p>Trong quá trình học tập và huấn luyện tại Việt Nam, Chloe Quý Châu là chuyên gia nguyên vật liệu, kiến trúc ABNLP Coaching Division cấp phép đào tạo NLP Master Coach. Chloe tập trung truyền tải nguyên bản công cụ NLP để học viên hiểu rõ, đúng, đủ và ứng dụng linh hoạt vào cuộc sống.</p>
<p>Chloe cũng là một trong số ít người Việt đầu tiên được chứng nhận đào tạo Time Line Therapy® trực tiếp từ hiệp hội, một phương pháp mạnh mẽ giúp xử lý sâu sắc các cảm xúc tiêu cực và niềm tin giới hạn.</p></div></div>
</section>
<section class="credentials">
<p>Hành trình chuyên nghiệp của Chloe được xây dựng trên nền tảng kinh nghiệm khai vấn (coaching) được chứng nhận bởi hàng loạt các tổ chức uy tín trên thế giới, bao gồm:</p>
<div class="grid grid-3">
  <div class="card"><span class="feature-icon" aria-hidden="true">💡</span><h4>Hiệp hội ABNLP</h4><p>Chứng nhận năng lực khai vấn bằng công cụ NLP.</p></div>
  <div class="card"><span class="feature-icon" aria-hidden="true">📈</span><h4>Tổ chức huấn luyện doanh nghiệp ActionCoach</h4><p>Chứng nhận khả năng huấn luyện và phát triển doanh nghiệp.</p></div>
  <div class="card"><span class="feature-icon" aria-hidden="true">⏳</span><h4>Hiệp hội Time Line Therapy®</h4><p>Chứng nhận đào tạo Time Line Therapy®.</p></div>
</div>
</section>
"#;

const NLP_INTRO: &str = r#"<section id="section2" class="hero hero-nlp">
<img src="https://placehold.co/800x300/4f46e5/ffffff" alt="NLP Background"/>
<div class="hero-text"><h1>NLP</h1><p>LẬP TRÌNH NGÔN NGỮ TƯ DUY</p></div>
</section>
<section class="nlp-intro">
<h2>CHÌA KHÓA MỞ RA CÁNH CỬA CUỘC SỐNG VƯỢT TRỘI</h2>
<p><strong>Lập Trình Ngôn Ngữ Tư Duy NLP</strong> (Neuro Linguistic Programming) là chìa khóa giúp khai phá sức mạnh của bản thân. Các nhà khoa học đã công nhận tầm quan trọng của phương pháp NLP. Nếu hiểu rõ về NLP, bạn sẽ có cơ hội phát triển bản thân lên tầm cao mới. Vậy phương pháp NLP là gì?</p>
<p>NLP được khởi nguồn tại Mỹ, bởi John Grinder (nhà ngôn ngữ học) và Richard Bandler (nhà toán học và liệu pháp tâm lý Gestalt) với mục đích tạo ra các mô hình học tập rõ ràng về sự xuất sắc của con người.</p>
<h2>3 CÂU HỎI MUỐN THUÊ:</h2>
<p>Mỗi ngày, chúng ta đều trăn trở về những câu hỏi sâu sắc về cuộc sống:</p>
<ol class="questions">
  <li>Tại sao tôi trở thành con người mà tôi đang là?</li>
  <li>Tôi thực sự mong muốn điều gì trong cuộc đời?</li>
  <li>Làm thế nào để tôi vượt qua những rào cản và đạt được điều mình mong muốn?</li>
</ol>
<p>Bạn chính là tác giả của cuộc đời mình, là đạo diễn của vở kịch mang tên "Cuộc sống" mà bạn đóng vai chính. Mỗi người sinh ra đều sở hữu tiềm năng to lớn bên trong để kiến tạo cuộc sống như mong muốn. Tuy nhiên, thay vì nắm chặt tay chèo dẫn dắt con thuyền cuộc đời mình đến mục tiêu, nhiều người lại không biết tiếp tục bước đi như thế nào. Những nỗi lo âu đã vô tình đặt cản đường xuất hiện, khiến nhiều người lựa chọn dừng lại.</p>
<h2>Nhưng bạn sẽ không nằm trong số đó!</h2>
<h3>NLP - Nguồn lực mạnh mẽ giúp bạn làm chủ cuộc đời</h3>
<p>Một trong những nguồn lực tuyệt vời nhất mà mỗi người sở hữu chính là khả năng học cách làm chủ tâm trí và hiện diện - sống trọn vẹn với thực tại. Cách chúng ta phản ứng với cuộc sống, những suy nghĩ, cảm xúc, hành động, niềm tin và giá trị theo đuổi đóng vai trò vô cùng quan trọng, tác động trực tiếp đến mọi kết quả trong cuộc đời. Và NLP chính là công cụ giúp bạn làm chủ những yếu tố then chốt này.</p>
</section>
<section class="nlp-what">
<h2>NLP là gì?</h2>
<p>Một cách đơn giản, thuật ngữ "Lập trình ngôn ngữ tư duy" đề cập đến những chương trình chạy ngầm trong tiềm thức, dẫn dắt hành vi và tạo ra kết quả trong cuộc sống của chúng ta.</p>
<div class="grid grid-3">
  <div class="card"><h2>Neuro - Tư duy</h2><p>Hệ thống nơ-ron bộ và mạng lưới thần kinh sinh tồn. Trong con người có trung bình dao động từ 80 đến 100 tỷ nơ-ron, hoạt động chính của nó là giúp chúng ta có thể tiếp nhận, xử lý thông tin. Sau đó bộ não sẽ tạo ra các thiết lập và hệ thống phản hồi làm việc một cách hiệu quả hơn trong cuộc sống.</p></div>
  <div class="card"><h2>Linguistic - Ngôn ngữ</h2><p>Cách chúng ta sử dụng ngôn từ không chỉ đơn thuần diễn đạt ý định của chúng ta mà còn thể hiện niềm tin và thái độ của mỗi người. Một lời nói có thể mang năng lượng tích cực, có thể mang năng lượng tiêu cực.</p></div>
  <div class="card"><h2>Programming - Lập trình</h2><p>Tương tự như hệ điều hành máy tính, lập trình ngôn ngữ tư duy là dòng hóa các phản ứng thông tin và hành vi. Nó là một tập hợp các nguyên tắc giúp điều chỉnh các kiểu suy nghĩ và hành vi không mong muốn, để đạt được hiệu quả hơn.</p></div>
</div>
</section>
<section class="banner">
<h2>NLP - Tái cấu trúc hệ điều hành cuộc đời bạn</h2>
<p>NLP dựa trên cơ sở bộ não của chúng ta có thể được tái cấu trúc để biến chúng ta thành những thực thể mới. Hay nói cách khác, bộ não là hệ điều hành của cuộc sống. NLP giúp thay đổi cách chúng ta nghĩ về bản thân, về người khác, về thế giới và thay thế bằng những điều hữu ích cho cuộc sống. NLP giúp tái cấu trúc những chương trình chạy ngầm bên trong, từ đó thay đổi tư duy và hành vi để đạt được hiệu quả.</p>
</section>
"#;

const TLT_INTRO: &str = r#"<section id="section1" class="hero">
<img src="https://placehold.co/800x300/b0e0e6/000000?text=InnerBright+Team" alt="InnerBright Team"/>
<div class="hero-text"><h1>CÂU CHUYỆN VỀ InnerBright</h1>
<p>InnerBright Training &amp; Coaching được thành lập từ năm 2020 bởi nhà đào tạo Chloe Quý Châu</p></div>
</section>
<section class="tlt-intro">
<h2>ỨNG DỤNG KỸ THUẬT</h2>
<h1>TIME LINE THERAPY<sup>&reg;</sup></h1>
<p>Time Line Therapy® (TLT) là một phương pháp trị liệu và phát triển cá nhân độc đáo, được sáng lập bởi Tiến sĩ Tad James, năm 1980. Điểm đặc biệt của TLT nằm ở cách tiếp cận vấn đề thông qua dòng thời gian nội tại của mỗi người: cách thức mà chúng ta vô thức lưu trữ ký ức và trải nghiệm theo một trình tự thời gian trong tâm trí.</p>
<p>Thay vì tập trung vào việc phân tích chi tiết từng sự kiện gây ra vấn đề, TLT giúp bạn xác định và làm việc trực tiếp với gốc rễ của những cảm xúc tiêu cực, niềm tin giới hạn và các quyết định tiêu cực đã được hình thành trong quá khứ. Phương pháp này dựa trên tiền đề rằng, những trải nghiệm trong quá khứ, dù đã qua, vẫn tiếp tục ảnh hưởng đến suy nghĩ, cảm xúc và hành vi của chúng ta ở hiện tại thông qua cách chúng ta lưu trữ và phản ứng với chúng.</p>
</section>
"#;

const TLT_TECHNIQUES: &str = r#"<section class="techniques">
<h1>CÁC KỸ THUẬT TRỊ LIỆU DÒNG THỜI GIAN</h1>
<h2>CÁC KỸ THUẬT CỦA <span class="accent">Time Line Therapy®</span> - Trị Liệu Dòng Thời Gian</h2>
<div class="grid grid-3">
  <div class="card"><h3><span role="img" aria-label="past">🕰️</span> Quá khứ</h3><ul><li>Giải tỏa các đè nén từ ký ức cũ</li><li>Cảm xúc tiêu cực</li><li>Niềm tin giới hạn</li><li>Trải nghiệm bất lợi gây sang chấn tâm lý</li></ul></div>
  <div class="card"><h3><span role="img" aria-label="present">⏳</span> Hiện tại</h3><ul><li>Cài đặt nguồn lực</li><li>Cơn đau thể lý mãn tính</li><li>Mâu thuẫn nội tâm</li><li>Kết nối cảm xúc</li><li>Tháo gỡ ám ảnh</li><li>Tháo gỡ mâu thuẫn nội tâm</li></ul></div>
  <div class="card"><h3><span role="img" aria-label="future">🚀</span> Tương lai</h3><ul><li>Giải tỏa lo âu</li><li>Cài đặt mục tiêu</li></ul></div>
</div>
</section>
"#;

const FOOTER_SHOWCASE: &str = r##"<section class="footer-showcase">
<div class="grid grid-4">
  <div><h3>Innerbright</h3><p>Cửa hàng trực tuyến hàng đầu với sản phẩm chất lượng cao</p>
    <p class="social"><a href="#"><span>Facebook</span> 📘</a> <a href="#"><span>Instagram</span> 📷</a> <a href="#"><span>Twitter</span> 🐦</a></p></div>
  <div><h3>Liên kết nhanh</h3><ul><li><a href="/">Trang chủ</a></li><li><a href="/sanpham">Sản phẩm</a></li><li><a href="/">Về chúng tôi</a></li><li><a href="/contact">Liên hệ</a></li></ul></div>
  <div><h3>Hỗ trợ khách hàng</h3><ul><li><a href="/help">Trung tâm hỗ trợ</a></li><li><a href="/shipping">Vận chuyển</a></li><li><a href="/returns">Đổi trả</a></li><li><a href="/warranty">Bảo hành</a></li></ul></div>
  <div><h3>Thông tin liên hệ</h3><p>📍 123 Đường ABC, Quận 1, TP.HCM</p><p>📞 0123 456 789</p><p>✉️ info@innerbright.com</p><p>🕒 8:00 - 22:00 (Thứ 2 - Chủ nhật)</p></div>
</div>
<p class="copyright">&copy; 2025 Innerbright. Tất cả quyền được bảo lưu.</p>
</section>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use katacore_core::pwa::PwaConfig;
    use katacore_core::site::SiteConfig;

    #[test]
    fn only_root_has_a_static_renderer() {
        let site = SiteConfig::default();
        let pwa = PwaConfig::default();
        let chrome = Chrome {
            site: &site,
            pwa: &pwa,
            stylesheet: "/assets/site.css",
        };
        let html = render_static(&chrome, "/");
        assert!(html.as_deref().is_some_and(|h| h.contains("5 Nền Tảng")));
        assert!(html.as_deref().is_some_and(|h| h.contains("Đăng nhập")));
        assert!(render_static(&chrome, "/nlp").is_none());
    }

    #[test]
    fn accordion_ids_are_distinct() {
        assert_ne!(FIVE_FOUNDATIONS.id, TLT_MECHANISM.id);
        assert_eq!(FIVE_FOUNDATIONS.items.len(), 5);
        assert_eq!(TLT_MECHANISM.items.len(), 5);
    }
}
