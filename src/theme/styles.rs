//! Global CSS styles for the Converse desktop shell.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --void-black: #0a0a0a;
  --void-lighter: #0f1112;
  --void-border: #1a1a1a;

  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);
  --gold: #d4af37;

  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  --danger: #ff3366;
  --warning: #ff9f00;

  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
}

/* === Chat Container === */
.chat-container {
  display: flex;
  flex-direction: column;
  height: 100vh;
}

.chat-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--void-border);
  background: var(--void-lighter);
}

.session-info {
  color: var(--gold);
  font-size: 0.875rem;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Error Banner === */
.session-error-banner {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--danger);
  background: rgba(255, 51, 102, 0.08);
}

.error-banner-icon {
  color: var(--warning);
  font-size: 1.25rem;
}

.error-banner-content {
  flex: 1;
  min-width: 0;
}

.error-banner-title {
  color: var(--danger);
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.error-banner-message {
  color: var(--text-primary);
  font-size: 0.875rem;
}

.error-banner-details {
  color: var(--text-muted);
  font-size: 0.75rem;
}

/* === Messages === */
.messages {
  flex: 1;
  overflow-y: auto;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.message-row {
  display: flex;
}

.message-row-sent {
  justify-content: flex-end;
}

.message-row-received {
  justify-content: flex-start;
}

.message-row-system {
  justify-content: center;
}

.message-bubble {
  max-width: 80%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--void-border);
  border-radius: 8px;
  background: var(--void-lighter);
}

.message-bubble-sent {
  border-color: var(--cyan);
  background: rgba(0, 212, 170, 0.06);
}

.message-bubble-system {
  border-style: dashed;
  color: var(--text-secondary);
}

.message-bubble-sender {
  color: var(--text-muted);
  font-size: 0.6875rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  margin-bottom: 0.25rem;
}

.message-bubble-content {
  font-size: 0.875rem;
  white-space: pre-wrap;
  word-break: break-word;
}

.message-markdown {
  white-space: normal;
}

.message-markdown p + p {
  margin-top: 0.5rem;
}

.message-markdown code {
  color: var(--cyan);
  background: var(--void-black);
  padding: 0 0.25em;
  border-radius: 3px;
}

.message-markdown pre {
  background: var(--void-black);
  padding: 0.5rem;
  border-radius: 6px;
  overflow-x: auto;
  margin: 0.5rem 0;
}

.message-bubble-time {
  color: var(--text-muted);
  font-size: 0.6875rem;
  margin-top: 0.25rem;
  text-align: right;
}

/* === Streaming Indicator === */
.streaming-indicator {
  display: inline-flex;
  gap: 4px;
  padding: 0.25rem 0;
}

.streaming-dot {
  width: 5px;
  height: 5px;
  border-radius: 50%;
  background: var(--cyan);
  animation: streaming-pulse 1.2s infinite ease-in-out;
}

.streaming-dot:nth-child(2) { animation-delay: 0.2s; }
.streaming-dot:nth-child(3) { animation-delay: 0.4s; }

@keyframes streaming-pulse {
  0%, 80%, 100% { opacity: 0.25; }
  40% { opacity: 1; }
}

/* === Permission Prompt === */
.permission-prompt {
  margin-top: 0.5rem;
  padding: 0.5rem;
  border: 1px solid var(--warning);
  border-radius: 6px;
}

.permission-description {
  color: var(--text-secondary);
  font-size: 0.8125rem;
  margin-bottom: 0.5rem;
}

.permission-actions {
  display: flex;
  gap: 0.5rem;
}

/* === Input Area === */
.input-area {
  position: relative;
  display: flex;
  flex-direction: column;
  border-top: 1px solid var(--void-border);
  background: var(--void-lighter);
  padding: 0 0.75rem 0.75rem;
}

.input-resize-handle {
  height: 10px;
  margin: 0 -0.75rem;
  cursor: ns-resize;
  display: flex;
  align-items: center;
  justify-content: center;
}

.input-resize-handle:hover .resize-handle-bar {
  background: var(--cyan);
}

.resize-handle-bar {
  width: 48px;
  height: 3px;
  border-radius: 2px;
  background: var(--void-border);
  transition: background var(--transition-fast);
}

.input-toolbar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding-bottom: 0.5rem;
}

.running-indicator {
  color: var(--cyan);
  font-size: 0.75rem;
  animation: streaming-pulse 1.2s infinite ease-in-out;
}

.input-controls {
  display: flex;
  gap: 0.5rem;
  flex: 1;
  min-height: 0;
}

.chat-input-textarea {
  flex: 1;
  height: 100%;
  resize: none;
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--cyan);
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 6px;
  padding: 0.5rem;
  outline: none;
}

.chat-input-textarea:focus {
  border-color: var(--cyan);
  box-shadow: 0 0 6px var(--cyan-glow);
}

.chat-input-textarea::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.chat-input-textarea:disabled {
  opacity: 0.5;
}

/* === Model Selector === */
.model-selector {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.model-selector-label {
  color: var(--text-muted);
  font-size: 0.75rem;
}

.model-selector-dropdown {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-primary);
  background: var(--void-black);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  padding: 0.2rem 0.4rem;
  max-width: 360px;
}

.model-selector-dropdown:disabled {
  opacity: 0.5;
}

/* === Buttons === */
.btn-icon {
  font-family: var(--font-mono);
  color: var(--text-secondary);
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 6px;
  width: 2.25rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-icon:hover:not(:disabled) {
  color: var(--cyan);
  border-color: var(--cyan);
}

.btn-icon:disabled {
  opacity: 0.4;
  cursor: default;
}

.btn-send {
  color: var(--cyan);
}

.btn-stop {
  color: var(--danger);
  border-color: var(--danger);
}

.btn-close-session {
  width: auto;
  padding: 0 0.5rem;
  font-size: 1rem;
}

.btn-small {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-primary);
  background: transparent;
  border: 1px solid var(--cyan);
  border-radius: 4px;
  padding: 0.2rem 0.6rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-small:hover {
  box-shadow: 0 0 6px var(--cyan-glow);
}

.btn-cancel {
  border-color: var(--void-border);
  color: var(--text-muted);
}

.error-banner-retry {
  border-color: var(--danger);
}

/* === Resize Overlay === */
/* Mounted only while a drag is active; carries the global cursor and
   selection override for the drag's duration. */
.resize-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  cursor: ns-resize;
  user-select: none;
  -webkit-user-select: none;
}

/* === Scroll anchor === */
.scroll-anchor {
  height: 1px;
}
"#;
