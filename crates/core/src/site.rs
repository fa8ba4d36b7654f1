//! Static site markup: header, footer, loading indicator and fallbacks.

/// Site header with navigation and mobile menu toggle.
///
/// Navigation anchors carry `data-page` values matching page basenames.
pub const HEADER_MARKUP: &str = r#"<header class="header">
    <nav class="nav">
        <div class="logo">
            <a href="index.html">
                <img class="logo-image" src="./images/logo.png" alt="文山建築設計事務所">
            </a>
        </div>
        <button class="mobile-menu-toggle" type="button" aria-label="メニュー">
            <span></span><span></span><span></span>
        </button>
        <ul class="nav-links">
            <li><a href="index.html" data-page="index">ホーム</a></li>
            <li><a href="about.html" data-page="about">会社概要</a></li>
            <li><a href="services.html" data-page="services">サービス</a></li>
            <li><a href="works.html" data-page="works">実績</a></li>
            <li><a href="blog.html" data-page="blog">ブログ</a></li>
            <li><a href="contact.html" data-page="contact">お問い合わせ</a></li>
        </ul>
    </nav>
</header>"#;

pub const FOOTER_MARKUP: &str = r##"<footer>
    <div class="footer-content">
        <div class="footer-section">
            <h4>文山建築設計事務所</h4>
            <p>FUMIYAMA ARCHITECT'S DESIGN ASSOCIATES</p>
            <p>〒547-0044<br>大阪市平野区平野本町2-10-4<br>えんだら百歩4C</p>
            <p>TEL: 06-7660-4777</p>
            <p>Email: s1@fada.email</p>
        </div>
        <div class="footer-section">
            <h4>メニュー</h4>
            <a href="index.html">ホーム</a>
            <a href="about.html">会社概要</a>
            <a href="services.html">サービス</a>
            <a href="works.html">実績</a>
            <a href="blog.html">ブログ</a>
        </div>
        <div class="footer-section">
            <h4>お問い合わせ</h4>
            <a href="contact.html">お問い合わせ</a>
            <a href="#">プライバシーポリシー</a>
        </div>
    </div>
    <div class="footer-bottom">
        <p>&copy; 2024 FUMIYAMA ARCHITECT'S DESIGN ASSOCIATES. All rights reserved.</p>
    </div>
</footer>"##;

/// Shown in a placeholder while its fragment is being fetched.
pub const LOADING_MARKUP: &str = r#"<p style="text-align: center; color: #999;">コンテンツを読み込み中...</p>"#;

/// Returned for fragment labels with no registered fallback.
pub const CONTENT_UNAVAILABLE: &str = "<p>コンテンツを読み込めませんでした。</p>";

pub const SERVICES_FALLBACK: &str = r#"<div class="summary-fallback">
    <p>サービス内容を表示できませんでした。</p>
    <p><a href="services.html">サービスページ</a>をご覧ください。</p>
</div>"#;

pub const ABOUT_FALLBACK: &str = r#"<div class="summary-fallback">
    <p>会社概要を表示できませんでした。</p>
    <p><a href="about.html">会社概要ページ</a>をご覧ください。</p>
</div>"#;

pub const WORKS_FALLBACK: &str = r#"<div class="summary-fallback">
    <p>実績を表示できませんでした。</p>
    <p><a href="works.html">実績ページ</a>をご覧ください。</p>
</div>"#;

pub const BLOG_FALLBACK: &str = r#"<div style="text-align: center; padding: 6rem 2rem; background: #f8f9fa; border-radius: 12px; margin-bottom: 4rem;">
    <h2 style="font-size: 2rem; color: #2c5f7d; margin-bottom: 1rem;">ブログコンテンツ作成中</h2>
    <p style="font-size: 1.1rem; color: #666; line-height: 1.8;">
        現在、ブログコンテンツを準備しております。<br>
        建築設計のヒントやプロジェクトの紹介など、有益な情報を定期的に更新予定です。<br>
        今しばらくお待ちください。
    </p>
</div>"#;
