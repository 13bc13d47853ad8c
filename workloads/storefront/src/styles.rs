//! Inline page styles.

pub const STOREFRONT_STYLES: &str = r##"
:root {
    --primary: #0d9488;
    --primary-hover: #0f766e;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    gap: 2rem;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
    position: sticky;
    top: 0;
    z-index: 100;
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--primary);
    text-decoration: none;
}

.header-nav { flex: 1; }

.header-nav ul {
    display: flex;
    gap: 1.5rem;
    list-style: none;
}

.header-nav a {
    color: var(--text);
    text-decoration: none;
}

.search-box input {
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font-size: 1rem;
}

main {
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem;
}

.listing-heading {
    text-align: center;
    margin-bottom: 2rem;
}

.listing-heading h1 { font-size: 2rem; }

.tagline { color: var(--text-muted); }

.category-selector {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.5rem;
    margin-bottom: 2rem;
}

.category-button {
    padding: 0.5rem 1rem;
    border: 1px solid var(--primary);
    border-radius: 999px;
    color: var(--primary);
    text-decoration: none;
}

.category-button.active {
    background: var(--primary);
    color: white;
}

.medicine-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1.5rem;
}

.medicine-card {
    background: var(--card-bg);
    border-radius: 12px;
    overflow: hidden;
    transition: box-shadow 0.2s;
}

.medicine-card:hover {
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}

.medicine-link {
    color: inherit;
    text-decoration: none;
}

.medicine-image {
    aspect-ratio: 1;
    overflow: hidden;
    background: #f1f5f9;
}

.medicine-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.medicine-info { padding: 1rem; }

.medicine-name { font-size: 1.1rem; }

.medicine-brand { color: var(--text-muted); }

.medicine-price {
    font-weight: 700;
    color: var(--primary);
}

.medicine-detail .back-link,
.not-found .back-link {
    display: inline-block;
    margin-bottom: 1.5rem;
    color: var(--primary);
}

.detail-layout {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.detail-image img {
    width: 100%;
    border-radius: 12px;
}

.category-tag {
    display: inline-block;
    margin: 0.5rem 0 1rem;
    color: var(--primary);
}

.not-found { text-align: center; padding: 4rem 0; }

@media (max-width: 768px) {
    .site-header { flex-wrap: wrap; gap: 1rem; }
    .detail-layout { grid-template-columns: 1fr; }
    .medicine-grid {
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
    }
}
"##;
