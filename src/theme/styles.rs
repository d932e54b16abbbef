//! Global CSS styles for IMPCTON Rewards.
//!
//! Dark Telegram-style palette; picks up the host theme variables when the
//! page runs inside Telegram.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --night: var(--tg-theme-bg-color, #10151c);
  --night-raised: var(--tg-theme-secondary-bg-color, #1a212b);
  --night-border: #2a3340;

  /* Accents */
  --ton-blue: var(--tg-theme-button-color, #0098ea);
  --ton-blue-glow: rgba(0, 152, 234, 0.3);
  --amber: #f5a524;

  /* Text */
  --text-primary: var(--tg-theme-text-color, #f5f7fa);
  --text-muted: var(--tg-theme-hint-color, rgba(245, 247, 250, 0.55));
  --danger: #ff4d6a;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: var(--night);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.5;
}

/* === Page === */
.impcton-rewards {
  max-width: 480px;
  margin: 0 auto;
  padding: 1.5rem 1rem 5rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.page-title {
  font-size: 1.75rem;
  font-weight: 700;
  text-align: center;
}

.page-centered {
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 40vh;
}

.error-text {
  color: var(--danger);
  font-size: 0.95rem;
}

/* === User Info === */
.user-info {
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 12px;
  padding: 1rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.greeting {
  font-size: 1.1rem;
  font-weight: 600;
}

.token-balance {
  color: var(--amber);
  font-size: 1.5rem;
  font-weight: 700;
  font-variant-numeric: tabular-nums;
}

.farm-progress {
  height: 6px;
  border-radius: 3px;
  background: var(--night-border);
  overflow: hidden;
}

.farm-progress-fill {
  height: 100%;
  background: var(--amber);
  transition: width var(--transition-normal);
}

.farm-status, .level {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Buttons === */
.btn {
  font: inherit;
  font-weight: 600;
  padding: 0.6rem 1.1rem;
  border-radius: 8px;
  border: 1px solid transparent;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:disabled {
  opacity: 0.4;
  cursor: not-allowed;
  box-shadow: none;
}

.btn-contained {
  background: var(--ton-blue);
  color: #fff;
}

.btn-contained:hover:not(:disabled) {
  box-shadow: 0 0 12px var(--ton-blue-glow);
}

.btn-accent {
  background: var(--amber);
  color: #1a1200;
}

.btn-outlined {
  background: transparent;
  color: var(--ton-blue);
  border-color: var(--ton-blue);
}

.btn-text {
  background: transparent;
  color: var(--ton-blue);
}

.action-row {
  display: flex;
  gap: 0.75rem;
}

.action-row .btn {
  flex: 1;
}

/* === Text Field === */
.referral-section {
  display: flex;
  align-items: flex-end;
  gap: 0.75rem;
}

.text-field {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.text-field-label {
  color: var(--text-muted);
  font-size: 0.8rem;
}

.text-field.filled .text-field-label {
  color: var(--ton-blue);
}

.text-field-input {
  font: inherit;
  color: var(--text-primary);
  background: transparent;
  border: 1px solid var(--night-border);
  border-radius: 8px;
  padding: 0.55rem 0.75rem;
  outline: none;
}

.text-field-input:focus {
  border-color: var(--ton-blue);
  box-shadow: 0 0 0 3px var(--ton-blue-glow);
}

/* === Spinner === */
.spinner-ring {
  width: 40px;
  height: 40px;
  border: 4px solid var(--night-border);
  border-top-color: var(--ton-blue);
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.6);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-panel {
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 12px;
  padding: 1.5rem;
  width: min(90vw, 380px);
}

.modal-title {
  font-size: 1.2rem;
  margin-bottom: 0.5rem;
}

.modal-description {
  color: var(--text-muted);
  margin-bottom: 1.25rem;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
}

/* === Toast === */
.toast {
  position: fixed;
  left: 50%;
  bottom: 1.5rem;
  transform: translateX(-50%);
  background: #323a46;
  color: var(--text-primary);
  padding: 0.75rem 1.25rem;
  border-radius: 8px;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4);
  cursor: pointer;
  animation: toast-in var(--transition-normal);
  z-index: 200;
}

@keyframes toast-in {
  from { opacity: 0; transform: translate(-50%, 12px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}
"#;
