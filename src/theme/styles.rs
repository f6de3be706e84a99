//! Global CSS styles for the scrapbook page.
//!
//! Emerald-to-teal paper look. Class names match the components in
//! `crate::components` and `scrapbook_ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* EMERALD (Headings, Actions) */
  --emerald-50: #ecfdf5;
  --emerald-100: #d1fae5;
  --emerald-200: #a7f3d0;
  --emerald-500: #10b981;
  --emerald-600: #059669;
  --emerald-700: #047857;
  --emerald-800: #065f46;

  /* TEAL (Secondary text, Background) */
  --teal-100: #ccfbf1;
  --teal-600: #0d9488;

  /* SURFACES */
  --paper: #ffffff;
  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.1);
  --shadow-lg: 0 10px 15px rgba(0, 0, 0, 0.1);
  --shadow-xl: 0 20px 25px rgba(0, 0, 0, 0.1);
  --shadow-2xl: 0 25px 50px rgba(0, 0, 0, 0.25);
  --radius: 0.5rem;

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-entrance: 500ms ease-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--emerald-50);
  color: var(--emerald-700);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page === */
.scrapbook {
  max-width: 56rem;
  margin: 0 auto;
  padding: 1.5rem;
  background: linear-gradient(to bottom, var(--emerald-50), var(--teal-100));
}

.scrapbook__title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 3rem;
  color: var(--emerald-800);
}

.scrapbook__empty {
  text-align: center;
  color: var(--teal-600);
}

/* === Cards === */
.card {
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: var(--shadow-md);
  overflow: hidden;
}

.card__content {
  padding: 1rem;
}

.card--hoverable {
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.card--hoverable:hover {
  transform: scale(1.05);
  box-shadow: var(--shadow-xl);
}

/* === Gallery === */
.gallery {
  margin-bottom: 4rem;
}

.gallery__heading {
  font-size: 1.875rem;
  font-weight: 600;
  margin-bottom: 2rem;
}

.gallery__grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

@media (min-width: 768px) {
  .gallery__grid {
    grid-template-columns: 1fr 1fr;
  }
}

.photo-card {
  transition: opacity var(--transition-entrance), transform var(--transition-entrance);
}

.photo-card--hidden {
  opacity: 0;
  transform: translateY(50px);
}

.photo-card--visible,
.photo-card--static {
  opacity: 1;
  transform: translateY(0);
}

.photo-card--static {
  transition: none;
}

.photo-card__img {
  display: block;
  width: 100%;
  height: 16rem;
  object-fit: cover;
  border-radius: 0.375rem;
}

.photo-card__caption {
  margin-top: 1rem;
  text-align: center;
  font-weight: 500;
  color: var(--emerald-600);
}

/* === Buttons === */
.btn-section,
.btn-letter,
.icon-btn {
  font-family: inherit;
  border: none;
  cursor: pointer;
}

.btn-section {
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem;
  border-radius: var(--radius);
  background: var(--paper);
  color: var(--emerald-800);
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-section:hover {
  background: var(--emerald-50);
  box-shadow: var(--shadow-md);
}

.btn-letter {
  width: 100%;
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem;
  border-radius: var(--radius);
  background: var(--emerald-500);
  color: var(--paper);
  transition: background var(--transition-fast), box-shadow var(--transition-fast),
    transform var(--transition-fast);
}

.btn-letter:hover {
  background: var(--emerald-600);
  box-shadow: var(--shadow-lg);
  transform: translateY(-0.25rem);
}

.btn-letter__icon {
  font-size: 1.5rem;
}

.btn-letter__label {
  font-size: 1.25rem;
  font-weight: 600;
}

.icon-btn {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: var(--radius);
  background: transparent;
  color: var(--emerald-800);
  font-size: 1.5rem;
  line-height: 1;
}

.icon-btn:hover {
  background: var(--emerald-200);
}

/* === Collapsible Sections === */
.collapsible {
  margin-bottom: 2rem;
}

.collapsible__title {
  display: flex;
  align-items: center;
  font-size: 1.25rem;
  font-weight: 600;
}

.collapsible__icon {
  margin-right: 0.5rem;
  font-size: 1.5rem;
}

.chevron {
  display: inline-block;
  font-size: 1.5rem;
  transition: transform var(--transition-fast);
}

.chevron--open {
  transform: rotate(180deg);
}

.collapsible__body {
  display: grid;
  grid-template-rows: 0fr;
  opacity: 0;
  transition: grid-template-rows var(--transition-fast), opacity var(--transition-fast);
}

.collapsible__body--open {
  grid-template-rows: 1fr;
  opacity: 1;
}

.collapsible__inner {
  overflow: hidden;
}

.collapsible__card {
  margin-top: 0.5rem;
  box-shadow: var(--shadow-lg);
}

/* === Section Bodies === */
.vocabulary {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.vocabulary__row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem;
  border-radius: var(--radius);
  background: var(--paper);
  box-shadow: var(--shadow-sm);
  animation: slide-in 300ms ease-out both;
}

.collapsible__body:not(.collapsible__body--open) .vocabulary__row {
  animation: none;
}

.vocabulary__word {
  font-weight: 600;
  color: var(--emerald-700);
}

.vocabulary__meaning {
  color: var(--teal-600);
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

.prose__paragraph {
  line-height: 1.75;
}

.prose__paragraph + .prose__paragraph {
  margin-top: 1rem;
}

/* === Letter === */
.letter-section {
  position: relative;
  margin-bottom: 2rem;
}

.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.5);
  z-index: 50;
  outline: none;
}

.letter {
  position: relative;
  max-width: 550px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--emerald-100);
  box-shadow: var(--shadow-2xl);
  animation: letter-unfold 500ms ease-in-out both;
}

@keyframes letter-unfold {
  from { transform: scale(0) rotate(-180deg); }
  to { transform: scale(1) rotate(0deg); }
}

.letter__close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.letter__salutation {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--emerald-800);
  margin-bottom: 1rem;
  animation: fade-down 300ms ease-out 300ms both;
}

.letter__body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  animation: fade-in 300ms ease-out 500ms both;
}

.letter__signoff {
  text-align: right;
  font-style: italic;
}

@keyframes fade-down {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
