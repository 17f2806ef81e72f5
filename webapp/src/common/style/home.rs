pub const HOME_STYLES: &str = r#"
/* Portfolio Page Styles */

/* General Layout */
.page {
    min-height: 100vh;
    background: var(--background);
    color: var(--text-primary);
    transition: background var(--transition-slow) var(--easing-standard),
                color var(--transition-slow) var(--easing-standard);
  }

  .page section {
    max-width: var(--container-width);
    margin: 0 auto;
    padding: var(--space-16) var(--space-6);
    scroll-margin-top: 96px;
  }

  .section-heading {
    font-size: 2rem;
    font-weight: 700;
    margin-bottom: var(--space-3);
    text-align: center;
  }

  .section-lead {
    text-align: center;
    color: var(--text-secondary);
    margin-bottom: var(--space-10);
  }

  /* Progress bar */
  .scroll-progress {
    pointer-events: none;
    position: fixed;
    left: 0;
    top: 0;
    z-index: 75;
    height: 3px;
    width: 100%;
  }

  .scroll-progress-fill {
    height: 100%;
    transform-origin: left;
    background: linear-gradient(90deg, var(--accent-cyan), var(--primary-light), var(--accent-indigo));
    box-shadow: 0 0 16px rgba(59, 130, 246, 0.6);
  }

  /* Header */
  .app-header {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 1px solid var(--border);
    background-color: var(--header-surface);
    backdrop-filter: blur(24px);
  }

  .nav-container {
    position: relative;
    display: flex;
    height: var(--header-height);
    align-items: center;
    justify-content: space-between;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 var(--space-6);
  }

  .brand {
    font-size: 1.125rem;
    font-weight: 600;
  }

  .nav-links {
    display: flex;
    gap: var(--space-6);
    align-items: center;
    font-size: 0.875rem;
  }

  .nav-link {
    background: none;
    border: none;
    color: var(--text-primary);
    cursor: pointer;
    font-size: inherit;
  }

  .nav-link:hover {
    color: var(--primary-light);
  }

  .nav-link.active {
    color: var(--text-accent);
    font-weight: 600;
  }

  .nav-mobile-controls {
    display: none;
    gap: var(--space-3);
  }

  .mobile-menu {
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    display: flex;
    flex-direction: column;
    gap: var(--space-3);
    padding: var(--space-4) var(--space-6);
    background-color: var(--surface-raised);
    border-bottom: 1px solid var(--border);
  }

  @media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-mobile-controls { display: flex; }
  }

  /* Hero */
  .hero {
    display: grid;
    grid-template-columns: 1fr;
    gap: var(--space-10);
    align-items: center;
  }

  @media (min-width: 768px) {
    .hero { grid-template-columns: 3fr 2fr; }
  }

  .hero-title {
    font-size: 3rem;
    font-weight: 700;
    margin-bottom: var(--space-6);
    letter-spacing: -0.02em;
  }

  .hero-subtitle {
    font-size: 1.125rem;
    color: var(--text-secondary);
    margin-bottom: var(--space-8);
  }

  .hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: var(--space-4);
  }

  .hero-portrait {
    justify-self: center;
    border-radius: 1.25rem;
    padding: 6px;
    background: linear-gradient(135deg, var(--accent-cyan), var(--primary-light), var(--accent-indigo));
    box-shadow: 0 20px 55px rgba(37, 99, 235, 0.35);
  }

  .hero-portrait img {
    display: block;
    border-radius: 1rem;
    width: 320px;
    height: 320px;
    object-fit: cover;
  }

  /* Stats */
  .stats-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: var(--space-6);
    text-align: center;
  }

  @media (min-width: 768px) {
    .stats-grid { grid-template-columns: repeat(3, 1fr); }
  }

  .stat-card {
    border-radius: var(--radius-lg);
    border: 1px solid var(--border);
    background-color: var(--surface);
    padding: var(--space-6);
    transition: transform var(--transition-normal) var(--easing-standard);
  }

  .stat-card:hover {
    transform: translateY(-6px);
  }

  .stat-value {
    font-size: 2rem;
    font-weight: 700;
    color: var(--text-accent);
  }

  .stat-label {
    font-weight: 600;
  }

  .stat-subtext {
    font-size: 0.75rem;
    color: var(--text-tertiary);
  }

  /* Highlights */
  .highlight-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: var(--space-4);
  }

  @media (min-width: 768px) {
    .highlight-grid { grid-template-columns: repeat(2, 1fr); }
  }

  .highlight-card {
    text-align: left;
    border-radius: var(--radius-lg);
    border: 1px solid var(--border-accent);
    background-color: var(--surface-tint);
    color: var(--text-primary);
    padding: var(--space-4);
    cursor: pointer;
    transition: transform var(--transition-normal) var(--easing-standard);
  }

  .highlight-card:hover {
    transform: translateY(-8px) scale(1.015);
  }

  .highlight-impact {
    color: var(--text-accent);
    font-weight: 500;
  }

  /* Experience timeline */
  .timeline {
    display: flex;
    flex-direction: column;
    gap: var(--space-8);
  }

  .timeline-card {
    border-radius: var(--radius-xl);
    border: 1px solid var(--border);
    background-color: var(--surface);
    padding: var(--space-6);
    box-shadow: var(--shadow-md);
  }

  .timeline-card.left { margin-right: 10%; }
  .timeline-card.right { margin-left: 10%; }

  .timeline-bar {
    height: 4px;
    border-radius: var(--radius-full);
    margin-bottom: var(--space-4);
    background: linear-gradient(90deg, var(--accent-cyan), var(--primary-light), var(--accent-indigo));
  }

  .timeline-card.right .timeline-bar {
    background: linear-gradient(90deg, var(--accent-emerald), var(--accent-cyan), var(--primary-light));
  }

  .metric-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: var(--space-2);
    margin: var(--space-4) 0;
  }

  @media (min-width: 768px) {
    .metric-grid { grid-template-columns: repeat(4, 1fr); }
  }

  .tag-list {
    display: flex;
    flex-wrap: wrap;
    gap: var(--space-2);
    margin-bottom: var(--space-4);
  }

  .tag {
    font-size: 0.75rem;
    border-radius: var(--radius-full);
    border: 1px solid var(--border-accent);
    padding: 2px var(--space-3);
  }

  .bullet-list {
    display: flex;
    flex-direction: column;
    gap: var(--space-2);
    padding-left: var(--space-4);
    font-size: 0.875rem;
  }

  .expand-toggle {
    margin-top: var(--space-4);
    background: none;
    border: none;
    color: var(--text-accent);
    cursor: pointer;
  }

  /* Contact */
  .contact-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: var(--space-4);
  }

  @media (min-width: 768px) {
    .contact-grid { grid-template-columns: repeat(2, 1fr); }
  }

  .contact-badges {
    display: flex;
    flex-wrap: wrap;
    gap: var(--space-2);
    margin: var(--space-4) 0;
  }

  .resume-tile {
    background: linear-gradient(90deg, var(--primary), #0891B2);
    color: white;
    border: none;
  }
"#;
