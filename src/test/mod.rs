mod contention_plot;
