pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  font-size: 0.875rem;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-light);
  text-decoration: none;
}

.btn-outline {
  background: transparent;
  border: 1px solid var(--primary-light);
  color: var(--text-primary);
}

.btn-outline:hover {
  background-color: var(--primary);
  color: white;
}

.btn-pill {
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-primary);
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1rem;
}

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  z-index: 80;
}

.modal-overlay.tech {
  z-index: 90;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background-color: var(--backdrop);
  backdrop-filter: blur(1px);
  border: none;
  cursor: pointer;
}

.modal-content {
  position: relative;
  width: 100%;
  max-height: 90vh;
  overflow: auto;
  border-radius: var(--radius-xl);
  border: 1px solid var(--border-accent);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  padding: var(--space-6);
  box-shadow: var(--shadow-xl);
  animation: modal-enter var(--transition-normal) var(--easing-standard);
}

@keyframes modal-enter {
  from { opacity: 0; transform: translateY(24px) scale(0.97); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}

.modal-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: var(--space-4);
  margin-bottom: var(--space-5);
}

.modal-eyebrow {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.24em;
  color: var(--text-accent);
  margin-bottom: var(--space-1);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.modal-footer {
  margin-top: var(--space-6);
  display: flex;
  justify-content: flex-end;
}

/* Tiles shared by the spotlight and the page */
.tile {
  border-radius: var(--radius-md);
  border: 1px solid var(--border-accent);
  background-color: var(--surface-tint);
  padding: var(--space-3);
}

.tile-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  gap: var(--space-3);
}

.tech-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-2);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  padding: var(--space-3);
  background-color: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.tech-tile:hover {
  transform: translateY(-3px) scale(1.03);
}

.tech-monogram {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  border-radius: var(--radius-md);
  border: 1px solid currentColor;
  font-weight: 700;
}

.link-tile {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-3);
  color: var(--text-primary);
}

.link-tile:hover {
  text-decoration: none;
  transform: translateY(-3px);
}
"#;
