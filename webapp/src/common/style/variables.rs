pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* Primary brand blue */
  --primary-light: #3B82F6;    /* Lighter blue for hover states */
  --primary-dark: #1D4ED8;     /* Darker blue for active states */
  --accent-cyan: #22D3EE;
  --accent-indigo: #6366F1;
  --accent-emerald: #10B981;

  /* Neutrals */
  --neutral-50: #F8FAFC;
  --neutral-100: #F1F5F9;
  --neutral-200: #E2E8F0;
  --neutral-300: #CBD5E1;
  --neutral-400: #94A3B8;
  --neutral-500: #64748B;
  --neutral-600: #475569;
  --neutral-700: #334155;
  --neutral-800: #1E293B;
  --neutral-900: #0F172A;

  /* Background and Surface Colors */
  --background: linear-gradient(135deg, var(--neutral-100), #FFFFFF, var(--neutral-100));
  --surface: rgba(255, 255, 255, 0.85);
  --surface-raised: #FFFFFF;
  --surface-tint: rgba(239, 246, 255, 0.7);
  --header-surface: rgba(255, 255, 255, 0.7);
  --backdrop: rgba(0, 0, 0, 0.55);

  /* Text Colors */
  --text-primary: #111827;
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);
  --text-accent: #1D4ED8;
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: rgba(203, 213, 225, 0.7);
  --border-accent: rgba(191, 219, 254, 0.8);

  /* Layout */
  --header-height: 68px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.15), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark theme, switched by the class on <html> */
:root.dark {
  --background: linear-gradient(135deg, #0F172A, #1E293B, #0F172A);
  --surface: rgba(30, 41, 59, 0.45);
  --surface-raised: var(--neutral-900);
  --surface-tint: rgba(59, 130, 246, 0.1);
  --header-surface: rgba(15, 23, 42, 0.55);
  --backdrop: rgba(0, 0, 0, 0.6);

  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);
  --text-accent: #93C5FD;

  --border: rgba(51, 65, 85, 0.7);
  --border-accent: rgba(29, 78, 216, 0.4);
}"#;
