//! CSS styles for the playground page.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Dark theme, matched to Monaco's vs-dark */
:root {
    --bg: #1e1e1e;
    --panel: #252526;
    --fg: #d4d4d4;
    --muted: #858585;
    --border: #3c3c3c;
    --accent: #00add8;
    --accent-hover: #5dc9e2;
    --error: #f48771;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.5;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem;
}

header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 0.75rem;
}

header h1 {
    font-size: 1.25rem;
    font-weight: 600;
    flex: 1;
}

.btn {
    padding: 0.4rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--panel);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.9rem;
    font-family: inherit;
}
.btn:hover { border-color: var(--accent); }
.btn.primary {
    background: var(--accent);
    border-color: var(--accent);
    color: #fff;
}
.btn.primary:hover { background: var(--accent-hover); }

#container {
    height: 60vh;
    border: 1px solid var(--border);
}

#status {
    font-family: "SF Mono", Consolas, "Liberation Mono", monospace;
    font-size: 0.8rem;
    color: var(--muted);
    min-height: 1.4em;
    padding: 0.2rem 0.4rem;
}

#vim-note {
    display: none;
    font-size: 0.85rem;
    color: var(--muted);
    margin: 0.25rem 0 0.5rem;
}
#vim-note code {
    background: var(--panel);
    padding: 0 0.25rem;
    border-radius: 3px;
}

#result-container {
    display: none;
    margin-top: 0.75rem;
    background: #000;
    border: 1px solid var(--border);
    border-radius: 4px;
}

#result {
    font-family: "SF Mono", Consolas, "Liberation Mono", monospace;
    font-size: 0.85rem;
    white-space: pre-wrap;
    padding: 0.75rem;
    max-height: 40vh;
    overflow: auto;
}

#share-url-container {
    display: none;
    position: relative;
    margin-top: 0.75rem;
}

#share-url {
    width: 100%;
    padding: 0.4rem 0.6rem;
    background: var(--panel);
    color: var(--fg);
    border: 1px solid var(--border);
    border-radius: 4px;
    font-family: inherit;
    cursor: pointer;
}

#share-url-tooltip {
    display: none;
    position: absolute;
    right: 0.5rem;
    top: -1.8rem;
    background: var(--accent);
    color: #fff;
    font-size: 0.8rem;
    padding: 0.15rem 0.5rem;
    border-radius: 3px;
}
"#;
