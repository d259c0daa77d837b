//! Editor page template.
//!
//! Monaco and monaco-vim are loaded from a CDN. The inline script mirrors
//! the controllers in `crate::page`; every user-visible string comes from
//! there so the two cannot drift.

use crate::config::USER_AGENT;
use crate::page::{
    COMMAND_LINE, COMPILING_TEXT, DEFAULT_SNIPPET, DISABLE_LABEL, ENABLE_LABEL, RUN_FAILURE,
    SHARE_ERROR, TOOLTIP_DURATION, VI_MODE_KEY, WRITE_COMMAND,
};

use super::styles::STYLE;

const MONACO_VS: &str = "https://cdn.jsdelivr.net/npm/monaco-editor@0.52.0/min/vs";
const MONACO_VIM: &str = "https://cdn.jsdelivr.net/npm/monaco-vim@0.4.1/dist/monaco-vim";

fn js(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

// ============================================================================
// Page Template
// ============================================================================

pub fn render_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Go Playground</title>
    <link rel="icon" href="/favicon.ico">
    <link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png">
    <link rel="icon" type="image/png" sizes="16x16" href="/favicon-16x16.png">
    <link rel="apple-touch-icon" href="/apple-touch-icon.png">
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Go Playground</h1>
            <button class="btn primary" id="run-btn">Run</button>
            <button class="btn" id="reset-btn">Reset</button>
            <button class="btn" id="share-btn">Share</button>
            <button class="btn" id="toggle-vim-btn">{enable_label}</button>
        </header>

        <p id="vim-note">Vim mode is on. Type <code>:{write_command}</code> to run your code.</p>
        <div id="container"></div>
        <div id="status"></div>

        <div id="share-url-container">
            <span id="share-url-tooltip">Copied!</span>
            <input type="text" id="share-url" readonly title="Click to copy">
        </div>

        <div id="result-container">
            <pre id="result"></pre>
        </div>
    </div>

    <script src="{monaco_vs}/loader.js"></script>
    <script>
        const defaultCode = {default_code};
        const commandLine = {command_line};
        const compilingText = {compiling_text};
        const runFailure = {run_failure};
        const shareError = {share_error};
        const enableLabel = {enable_label_js};
        const disableLabel = {disable_label_js};
        const viModeKey = {vi_mode_key};
        const userAgent = {user_agent};

        require.config({{
            paths: {{
                'vs': '{monaco_vs}',
                'monaco-vim': '{monaco_vim}',
            }}
        }});

        require(['vs/editor/editor.main', 'monaco-vim'], function (_, MonacoVim) {{
            const editor = monaco.editor.create(document.getElementById('container'), {{
                value: defaultCode,
                language: 'go',
                theme: 'vs-dark',
                automaticLayout: true,
            }});

            const page = {{
                statusNode: document.getElementById('status'),
                vimNote: document.getElementById('vim-note'),
                toggleBtn: document.getElementById('toggle-vim-btn'),
                resultContainer: document.getElementById('result-container'),
                result: document.getElementById('result'),
                shareContainer: document.getElementById('share-url-container'),
                shareUrl: document.getElementById('share-url'),
                shareTooltip: document.getElementById('share-url-tooltip'),
                vimMode: null,
                runGeneration: 0,
                shareGeneration: 0,
            }};

            function hidePanels() {{
                page.resultContainer.style.display = 'none';
                page.shareContainer.style.display = 'none';
            }}

            // ---- Vim mode ----

            function enableVimMode() {{
                if (page.vimMode) return;
                page.vimMode = MonacoVim.initVimMode(editor, page.statusNode);
                MonacoVim.VimMode.Vim.defineEx('{write_command}', '', function () {{
                    runCode();
                }});
                page.vimNote.style.display = 'block';
                page.toggleBtn.textContent = disableLabel;
            }}

            function disableVimMode() {{
                if (!page.vimMode) return;
                page.vimMode.dispose();
                page.vimMode = null;
                page.statusNode.textContent = '';
                page.vimNote.style.display = 'none';
                page.toggleBtn.textContent = enableLabel;
            }}

            function toggleVimMode() {{
                const enabled = !page.vimMode;
                if (enabled) {{
                    enableVimMode();
                }} else {{
                    disableVimMode();
                }}
                localStorage.setItem(viModeKey, enabled ? 'true' : 'false');
            }}

            // ---- Run ----

            function renderResult(result) {{
                if (result.Errors) {{
                    return commandLine + '\nError: ' + result.Errors;
                }}
                const events = result.Events || [];
                return commandLine + '\n' + events.map(e => e.Message).join('\n');
            }}

            async function runCode() {{
                const generation = ++page.runGeneration;
                page.resultContainer.style.display = 'block';
                page.result.textContent = compilingText;
                const code = editor.getValue();

                let text;
                try {{
                    const response = await fetch('/compile', {{
                        method: 'POST',
                        headers: {{
                            'Content-Type': 'application/json',
                            'User-Agent': userAgent,
                        }},
                        body: JSON.stringify({{ version: 2, body: code }}),
                    }});
                    if (!response.ok) throw new Error('status ' + response.status);
                    text = renderResult(await response.json());
                }} catch (error) {{
                    console.error('Error running code:', error);
                    text = commandLine + '\nError: ' + runFailure;
                }}

                if (generation !== page.runGeneration) return;
                page.result.textContent = text;
            }}

            // ---- Share ----

            async function shareCode() {{
                const generation = ++page.shareGeneration;
                const code = editor.getValue();

                let value;
                try {{
                    const response = await fetch('/share', {{
                        method: 'POST',
                        headers: {{
                            'Content-Type': 'text/plain',
                            'User-Agent': userAgent,
                        }},
                        body: code,
                    }});
                    if (!response.ok) throw new Error('status ' + response.status);
                    value = (await response.json()).shareURL;
                }} catch (error) {{
                    console.error('Error sharing code:', error);
                    value = shareError;
                }}

                if (generation !== page.shareGeneration) return;
                page.shareUrl.value = value;
                page.shareContainer.style.display = 'block';
            }}

            function copyShareUrl() {{
                page.shareUrl.select();
                navigator.clipboard.writeText(page.shareUrl.value).then(() => {{
                    page.shareTooltip.style.display = 'block';
                    setTimeout(() => {{
                        page.shareTooltip.style.display = 'none';
                    }}, {tooltip_ms});
                }});
            }}

            // ---- Reset ----

            function resetCode() {{
                editor.setValue(defaultCode);
                hidePanels();
            }}

            // ---- Wiring ----

            if (localStorage.getItem(viModeKey) === 'true') {{
                enableVimMode();
            }}

            editor.onDidChangeModelContent(hidePanels);

            document.getElementById('run-btn').addEventListener('click', runCode);
            document.getElementById('reset-btn').addEventListener('click', resetCode);
            document.getElementById('share-btn').addEventListener('click', shareCode);
            page.toggleBtn.addEventListener('click', toggleVimMode);
            page.shareUrl.addEventListener('click', copyShareUrl);
        }});
    </script>
</body>
</html>"##,
        style = STYLE,
        enable_label = ENABLE_LABEL,
        write_command = WRITE_COMMAND,
        monaco_vs = MONACO_VS,
        monaco_vim = MONACO_VIM,
        default_code = js(DEFAULT_SNIPPET),
        command_line = js(COMMAND_LINE),
        compiling_text = js(COMPILING_TEXT),
        run_failure = js(RUN_FAILURE),
        share_error = js(SHARE_ERROR),
        enable_label_js = js(ENABLE_LABEL),
        disable_label_js = js(DISABLE_LABEL),
        vi_mode_key = js(VI_MODE_KEY),
        user_agent = js(USER_AGENT),
        tooltip_ms = TOOLTIP_DURATION.as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_controls() {
        let html = render_page();
        for id in [
            "run-btn",
            "reset-btn",
            "share-btn",
            "toggle-vim-btn",
            "share-url",
            "share-url-tooltip",
            "result-container",
            "vim-note",
            "status",
        ] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
    }

    #[test]
    fn test_page_embeds_default_snippet_as_json() {
        let html = render_page();
        assert!(html.contains(r#"const defaultCode = "package main\n\nimport \"fmt\"\n"#));
    }

    #[test]
    fn test_page_uses_local_endpoints() {
        let html = render_page();
        assert!(html.contains("fetch('/compile'"));
        assert!(html.contains("fetch('/share'"));
        assert!(html.contains("\"learn.gopherguides.com/1.0\""));
    }

    #[test]
    fn test_page_vim_wiring() {
        let html = render_page();
        assert!(html.contains("localStorage.getItem(viModeKey) === 'true'"));
        assert!(html.contains("defineEx('w'"));
        assert!(html.contains("}, 2000);"));
        assert!(html.contains(">Enable Vim Mode</button>"));
    }

    #[test]
    fn test_page_guards_stale_responses() {
        let html = render_page();
        assert!(html.contains("if (generation !== page.runGeneration) return;"));
        assert!(html.contains("if (generation !== page.shareGeneration) return;"));
    }
}
