mod page_bootstrap;
