//! Shared style strings so pages and components stay visually consistent.

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800"
}

pub fn btn_danger_small() -> &'static str {
    "rounded-md border border-rose-500/40 px-2 py-1 text-xs font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10"
}

pub fn nav_active() -> &'static str {
    "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
}

pub fn nav_inactive() -> &'static str {
    "rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
}

pub fn lang_active() -> &'static str {
    "rounded-lg px-3 py-1.5 text-sm font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40"
}

pub fn lang_inactive() -> &'static str {
    "rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-slate-600 hover:text-slate-300 transition"
}

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn section_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

pub fn text_secondary() -> &'static str {
    "text-slate-300"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}
