
#[cfg(test)]
mod resolver_tests;


#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod logout_flow_tests;

#[cfg(test)]
mod shell_render_tests;

#[cfg(test)]
mod guard_render_tests;
