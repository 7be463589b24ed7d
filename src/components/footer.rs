//! Footer Component

use leptos::*;

/// Static site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-r from-[#bbd2c5] to-[#536976] text-white py-12">
            <div class="container mx-auto px-4 grid grid-cols-1 md:grid-cols-3 gap-10 text-center">
                <div class="space-y-3">
                    <h3 class="text-xl font-bold">"Quick Links"</h3>
                    <ul class="space-y-2 text-sm">
                        <li><a href="#privacy-policy" class="hover:text-gray-300">"Privacy Policy"</a></li>
                        <li><a href="#terms" class="hover:text-gray-300">"Terms of Service"</a></li>
                        <li><a href="#contact" class="hover:text-gray-300">"Contact Us"</a></li>
                    </ul>
                </div>

                <div class="space-y-3">
                    <h3 class="text-xl font-bold">"Follow Us"</h3>
                    <div class="flex justify-center gap-6 text-sm">
                        <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" class="hover:text-gray-300">"Facebook"</a>
                        <a href="https://twitter.com" target="_blank" rel="noopener noreferrer" class="hover:text-gray-300">"Twitter"</a>
                        <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" class="hover:text-gray-300">"Instagram"</a>
                    </div>
                </div>

                <div class="space-y-3">
                    <h3 class="text-xl font-bold">"Contact"</h3>
                    <p class="text-sm">"Email: support@cybershield.com"</p>
                    <p class="text-sm">"Phone: +1 (800) 123-4567"</p>
                </div>
            </div>
        </footer>
    }
}
